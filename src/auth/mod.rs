// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wavecast-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wavecast and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Accounts and sessions.
//!
//! Credentials live as one JSON list under a single store key; the session is
//! three flat keys with no expiry or token. Login rejection is deliberately
//! generic so it does not reveal whether the email or the password was wrong.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Account, SessionUser};
use crate::nav::NavTarget;
use crate::store::{
    KeyValueStore, StoreError, LOGGED_IN_KEY, USER_ACCOUNTS_KEY, USER_EMAIL_KEY, USER_NAME_KEY,
};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Raw signup form input, trimmed during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug)]
pub enum AuthError {
    MissingName,
    MissingEmail,
    MissingPassword,
    PasswordMismatch,
    PasswordTooShort { min: usize },
    EmailTaken { email: String },
    InvalidCredentials,
    Store(StoreError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => f.write_str("please enter your full name"),
            Self::MissingEmail => f.write_str("please enter your email"),
            Self::MissingPassword => f.write_str("please enter a password"),
            Self::PasswordMismatch => f.write_str("passwords do not match"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters long")
            }
            Self::EmailTaken { email } => {
                write!(f, "an account with email {email:?} already exists")
            }
            Self::InvalidCredentials => f.write_str("invalid credentials"),
            Self::Store(source) => write!(f, "storage failure: {source}"),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(source) => Some(source),
            _ => None,
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(source: StoreError) -> Self {
        Self::Store(source)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub user: SessionUser,
    pub navigate_to: NavTarget,
}

/// Creates an account and logs the new user in.
///
/// Validation failures abort before any store write; on success the account
/// is appended to the credential list and the session keys are written.
pub fn sign_up<S: KeyValueStore>(
    store: &S,
    form: &SignUpForm,
    now: DateTime<Utc>,
) -> Result<AuthOutcome, AuthError> {
    let name = form.name.trim();
    let email = form.email.trim();
    let password = form.password.trim();
    let confirm_password = form.confirm_password.trim();

    if name.is_empty() {
        return Err(AuthError::MissingName);
    }
    if email.is_empty() {
        return Err(AuthError::MissingEmail);
    }
    if password.is_empty() {
        return Err(AuthError::MissingPassword);
    }
    if password != confirm_password {
        return Err(AuthError::PasswordMismatch);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }

    let mut accounts = load_accounts(store)?;
    if accounts.iter().any(|account| account.email() == email) {
        return Err(AuthError::EmailTaken { email: email.to_owned() });
    }

    accounts.push(Account::new(
        name,
        email,
        password,
        now.to_rfc3339_opts(SecondsFormat::Millis, true),
    ));
    save_accounts(store, &accounts)?;

    let user = SessionUser::new(name, email);
    write_session(store, &user)?;

    tracing::info!(email, "account created");
    Ok(AuthOutcome { user, navigate_to: NavTarget::GetStarted })
}

/// Checks credentials against the stored list.
///
/// Any mismatch yields the same generic rejection with no session change.
pub fn log_in<S: KeyValueStore>(
    store: &S,
    email: &str,
    password: &str,
) -> Result<AuthOutcome, AuthError> {
    let email = email.trim();
    let password = password.trim();

    let accounts = load_accounts(store)?;
    let account = accounts
        .iter()
        .find(|account| account.email() == email && account.password() == password)
        .ok_or(AuthError::InvalidCredentials)?;

    let user = SessionUser::new(account.name(), account.email());
    write_session(store, &user)?;

    tracing::info!(email, "login");
    Ok(AuthOutcome { user, navigate_to: NavTarget::Dashboard })
}

/// Reads the flat session keys; `None` when no one is logged in.
pub fn current_session<S: KeyValueStore>(store: &S) -> Result<Option<SessionUser>, StoreError> {
    if store.get(LOGGED_IN_KEY)?.as_deref() != Some("true") {
        return Ok(None);
    }
    let name = store.get(USER_NAME_KEY)?.unwrap_or_default();
    let email = store.get(USER_EMAIL_KEY)?.unwrap_or_default();
    Ok(Some(SessionUser::new(name, email)))
}

fn write_session<S: KeyValueStore>(store: &S, user: &SessionUser) -> Result<(), StoreError> {
    store.set(LOGGED_IN_KEY, "true")?;
    store.set(USER_NAME_KEY, user.name())?;
    store.set(USER_EMAIL_KEY, user.email())
}

fn load_accounts<S: KeyValueStore>(store: &S) -> Result<Vec<Account>, StoreError> {
    let Some(raw) = store.get(USER_ACCOUNTS_KEY)? else {
        return Ok(Vec::new());
    };
    let records: Vec<AccountJson> = serde_json::from_str(&raw)
        .map_err(|source| StoreError::Json { key: USER_ACCOUNTS_KEY.to_owned(), source })?;
    Ok(records
        .into_iter()
        .map(|json| Account::new(json.name, json.email, json.password, json.created_at))
        .collect())
}

fn save_accounts<S: KeyValueStore>(store: &S, accounts: &[Account]) -> Result<(), StoreError> {
    let records: Vec<AccountJson> = accounts
        .iter()
        .map(|account| AccountJson {
            name: account.name().to_owned(),
            email: account.email().to_owned(),
            password: account.password().to_owned(),
            created_at: account.created_at().to_owned(),
        })
        .collect();
    let raw = serde_json::to_string(&records)
        .map_err(|source| StoreError::Json { key: USER_ACCOUNTS_KEY.to_owned(), source })?;
    store.set(USER_ACCOUNTS_KEY, &raw)
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountJson {
    name: String,
    email: String,
    password: String,
    created_at: String,
}

//! Deadline-bounded wrappers around the key-stretching operations
//!
//! Sealing and opening are dominated by scrypt, which is CPU and memory
//! hungry on purpose. On a cooperative runtime that work belongs on the
//! blocking pool; these wrappers put it there and bound it with a caller
//! deadline. A missed deadline surfaces as
//! [`AccountError::OperationTimedOut`] and no key material is returned.

use std::time::Duration;

use tokio::task::spawn_blocking;
use tokio::time::timeout;

use arca_crypto::PrivateKey;

use crate::account::Account;
use crate::encryption::ScryptProfile;
use crate::error::AccountError;

/// Recover an account's private key off the async executor
pub async fn decrypt_key(
    account: &Account,
    password: &str,
    deadline: Duration,
) -> Result<PrivateKey, AccountError> {
    let account = account.clone();
    let password = password.to_string();
    let handle = spawn_blocking(move || account.decrypt_key(&password));
    match timeout(deadline, handle).await {
        Ok(Ok(result)) => result,
        Ok(Err(_)) => Err(AccountError::TaskFailure),
        Err(_) => Err(AccountError::OperationTimedOut),
    }
}

/// Build an account from a recovery phrase off the async executor
pub async fn account_from_mnemonic(
    label: &str,
    mnemonic: &str,
    password: &str,
    scrypt: ScryptProfile,
    deadline: Duration,
) -> Result<Account, AccountError> {
    let label = label.to_string();
    let mnemonic = mnemonic.to_string();
    let password = password.to_string();
    let handle = spawn_blocking(move || Account::from_mnemonic(&label, &mnemonic, &password, scrypt));
    match timeout(deadline, handle).await {
        Ok(Ok(result)) => result,
        Ok(Err(_)) => Err(AccountError::TaskFailure),
        Err(_) => Err(AccountError::OperationTimedOut),
    }
}

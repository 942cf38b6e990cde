use std::sync::{Arc, Mutex, MutexGuard};

use crate::blockchain::{Blockchain, CancelToken};

/// Shared state handed to every request handler
///
/// Owns the node's single ledger and the cancel tokens of the mining cycles
/// that are running or queued.
#[derive(Debug)]
pub struct AppState {
    blockchain: Arc<Blockchain>,
    mining: Mutex<Vec<CancelToken>>,
}

/// A registered mining cycle
///
/// Dropping it unregisters the token, including when the request future is
/// dropped before the cycle finishes.
#[derive(Debug)]
pub struct MiningRegistration<'a> {
    state: &'a AppState,
    token: CancelToken,
}

impl MiningRegistration<'_> {
    pub fn token(&self) -> &CancelToken {
        &self.token
    }
}

impl Drop for MiningRegistration<'_> {
    fn drop(&mut self) {
        self.state.mining().retain(|other| !other.same_as(&self.token));
    }
}

impl AppState {
    pub fn new(blockchain: Blockchain) -> Self {
        AppState {
            blockchain: Arc::new(blockchain),
            mining: Mutex::new(Vec::new()),
        }
    }

    pub fn blockchain(&self) -> Arc<Blockchain> {
        self.blockchain.clone()
    }

    fn mining(&self) -> MutexGuard<'_, Vec<CancelToken>> {
        self.mining.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Registers a new mining cycle for as long as the registration lives
    pub fn begin_mining(&self) -> MiningRegistration<'_> {
        let token = CancelToken::new();
        self.mining().push(token.clone());
        MiningRegistration { state: self, token }
    }

    /// Number of registered mining cycles
    pub fn mining_cycles(&self) -> usize {
        self.mining().len()
    }

    /// Cancels every registered cycle, returning how many were signalled
    pub fn cancel_mining(&self) -> usize {
        let tokens = self.mining();
        for token in tokens.iter() {
            token.cancel();
        }
        tokens.len()
    }
}

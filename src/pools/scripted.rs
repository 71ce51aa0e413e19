//! Scripted `ChainReader` for exercising the sampler without a node

use alloy::primitives::{Address, U256};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use crate::{errors::QueryError, pools::ChainReader};

#[derive(Debug, Clone)]
pub enum Reply {
    Value(U256),
    RateLimited,
    PrunedState,
    Undecodable,
    Rpc(&'static str),
}

impl Reply {
    pub fn raw(value: u64) -> Self {
        Reply::Value(U256::from(value))
    }

    fn into_result(self) -> Result<U256, QueryError> {
        match self {
            Reply::Value(v) => Ok(v),
            Reply::RateLimited => Err(QueryError::RateLimited("429 Too Many Requests".to_string())),
            Reply::PrunedState => Err(QueryError::StateUnavailable {
                code: -32000,
                message: "missing trie node".to_string(),
            }),
            Reply::Undecodable => Err(QueryError::Undecodable("empty return data".to_string())),
            Reply::Rpc(message) => Err(QueryError::Rpc(message.to_string())),
        }
    }
}

/// Replies are consumed in order per block; the last one repeats.
#[derive(Default)]
pub struct ScriptedReader {
    head: u64,
    timestamps: HashMap<u64, u64>,
    balances: RefCell<HashMap<u64, VecDeque<Reply>>>,
    values: RefCell<HashMap<u64, VecDeque<Reply>>>,
    pub calls: RefCell<Vec<(&'static str, u64)>>,
}

impl ScriptedReader {
    pub fn new(head: u64) -> Self {
        Self {
            head,
            ..Default::default()
        }
    }

    pub fn block(mut self, block: u64, timestamp: u64) -> Self {
        self.timestamps.insert(block, timestamp);
        self
    }

    pub fn balance(self, block: u64, reply: Reply) -> Self {
        self.balances.borrow_mut().entry(block).or_default().push_back(reply);
        self
    }

    pub fn value(self, block: u64, reply: Reply) -> Self {
        self.values.borrow_mut().entry(block).or_default().push_back(reply);
        self
    }

    /// Block with a successful balance and redemption value
    pub fn position(self, block: u64, timestamp: u64, shares: u64, value: u64) -> Self {
        self.block(block, timestamp)
            .balance(block, Reply::raw(shares))
            .value(block, Reply::raw(value))
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls.borrow().iter().filter(|(m, _)| *m == method).count()
    }

    fn next(replies: &RefCell<HashMap<u64, VecDeque<Reply>>>, block: u64) -> Reply {
        let mut replies = replies.borrow_mut();
        match replies.get_mut(&block) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or(Reply::Rpc("unscripted")),
            Some(queue) => queue.front().cloned().unwrap_or(Reply::Rpc("unscripted")),
            None => Reply::Rpc("unscripted"),
        }
    }
}

impl ChainReader for ScriptedReader {
    async fn latest_block_number(&self) -> Result<u64, QueryError> {
        self.calls.borrow_mut().push(("eth_blockNumber", self.head));
        Ok(self.head)
    }

    async fn block_timestamp(&self, block: u64) -> Result<u64, QueryError> {
        self.calls.borrow_mut().push(("timestamp", block));
        self.timestamps
            .get(&block)
            .copied()
            .ok_or(QueryError::BlockNotFound(block))
    }

    async fn share_balance(&self, _pool: Address, _owner: Address, block: u64) -> Result<U256, QueryError> {
        self.calls.borrow_mut().push(("balanceOf", block));
        Self::next(&self.balances, block).into_result()
    }

    async fn preview_withdraw(&self, _pool: Address, _shares: U256, block: u64) -> Result<U256, QueryError> {
        self.calls.borrow_mut().push(("preview_withdraw", block));
        Self::next(&self.values, block).into_result()
    }
}

//! Shared edit-session plumbing for the chain-editing commands.
//!
//! Every structural edit follows the same lifecycle: load the booking's
//! segments, edit an in-memory chain, splice the result back into the
//! parent list, persist atomically. Nothing is written until the whole
//! session validates, so a failed edit leaves storage untouched.

use crate::config::Config;
use crate::core::chain::Chain;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::segment::Segment;

pub fn with_chain<F>(cfg: &Config, booking: i64, op: F) -> AppResult<Vec<Segment>>
where
    F: FnOnce(&mut Chain) -> AppResult<()>,
{
    let mut pool = DbPool::new(&cfg.database)?;

    let mut parent = queries::load_chain(&mut pool, booking)?;
    let mut chain = Chain::from_segments(parent.clone())?;

    op(&mut chain)?;

    chain.commit(&mut parent, 0)?;
    queries::persist_chain(&mut pool, booking, &parent)?;

    Ok(parent)
}

//! Console session supervisor.
//!
//! Polls the transport link and the console engine, keeping at most one
//! interactive session alive:
//!
//! * `Idle` and link active: ask the engine for a session.
//! * `Active` and session terminated: hand the session back to the engine
//!   for reclamation, return to `Idle`.
//! * Anything else: nothing to do until the next poll.
//!
//! Sessions are moved into [`SessionEngine::release`], so the supervisor
//! cannot keep a reclaimed handle around or release it twice.
use crate::{devices::scheduler::Task, error::Error, hal::link::Link};

/// Interactive console engine. Owns the transport stream and the command
/// table that new sessions are bound to.
pub trait SessionEngine {
    type Session;

    /// Starts a new session on the transport.
    fn create(&mut self) -> Result<Self::Session, Error>;
    fn is_terminated(&self, session: &Self::Session) -> bool;
    /// Reclaims the resources of a terminated session.
    fn release(&mut self, session: Self::Session);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum State {
    Idle,
    Active,
}

/// Outcome of a single poll.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Transition {
    Unchanged,
    Spawned,
    Reclaimed,
    /// The engine refused to create a session; the next poll retries.
    SpawnFailed,
}

pub struct Supervisor<L: Link, E: SessionEngine> {
    link: L,
    engine: E,
    session: Option<E::Session>,
}

impl<L: Link, E: SessionEngine> Supervisor<L, E> {
    pub fn new(link: L, engine: E) -> Self { Self { link, engine, session: None } }

    pub fn state(&self) -> State {
        match self.session {
            Some(_) => State::Active,
            None => State::Idle,
        }
    }

    pub fn poll(&mut self) -> Transition {
        match self.session.take() {
            Some(session) if self.engine.is_terminated(&session) => {
                self.engine.release(session);
                log_info!("Console session reclaimed");
                Transition::Reclaimed
            }
            Some(session) => {
                self.session = Some(session);
                Transition::Unchanged
            }
            None if self.link.is_active() => match self.engine.create() {
                Ok(session) => {
                    self.session = Some(session);
                    log_info!("Console session spawned");
                    Transition::Spawned
                }
                Err(e) => {
                    log_warn!("Console session creation failed: {}", e);
                    Transition::SpawnFailed
                }
            },
            None => Transition::Unchanged,
        }
    }

    pub fn link_mut(&mut self) -> &mut L { &mut self.link }

    pub fn engine(&self) -> &E { &self.engine }

    pub fn engine_mut(&mut self) -> &mut E { &mut self.engine }
}

impl<L: Link, E: SessionEngine> Task for Supervisor<L, E> {
    fn run(&mut self) { self.poll(); }
}

//! Review-session state for tally
//!
//! Holds the presentation-side bookkeeping that sits outside the ingestion
//! core: which rows the reviewer has marked done, and the pool of
//! confirmation messages shown when a row is marked. Done marks are keyed
//! by record position in the current record set, so they are invalidated
//! wholesale whenever a new ingestion replaces the set — positions are not
//! stable identifiers across files.
//!
//! Ingestion output itself stays a pure function of input bytes; none of
//! this state ever feeds back into the pipeline.

mod messages;
mod session;

pub use messages::MessagePool;
pub use session::ReviewSession;

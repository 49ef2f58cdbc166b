//! # Generic Messages
//!
//! This module defines the message types exchanged between the `ResourceClient` and
//! the `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants mirror the four calls a remote catalog API exposes:
///
/// - **List**: every non-deleted record, in insertion order.
/// - **Create**: assigns a fresh id and appends the record.
/// - **Update**: merges a partial update into an existing record.
/// - **SoftDelete**: flags the record as deleted. Always answers with the id,
///   whether or not a record was found.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    SoftDelete {
        id: T::Id,
        respond_to: Response<T::Id>,
    },
}

//! Fleet domain ports
//!
//! The port trait names everything this domain needs from the persistence
//! collaborator. The core only computes over records the adapter has
//! already fetched; it never opens a connection itself. Adapters (database,
//! mock) implement this trait elsewhere.

use async_trait::async_trait;

use core_kernel::{BillingPeriod, DomainPort, MileageLogId, PortError};

use crate::member::Member;
use crate::mileage_log::{MileageLog, Trip};
use crate::vehicle::Vehicle;

/// Persistence contract for fleet records
///
/// Implementations must return mileage logs with their trips populated in
/// chronological order and each trip's riders populated.
#[async_trait]
pub trait FleetPort: DomainPort {
    /// Fetches a mileage log by ID, trips and riders included
    async fn mileage_log_by_id(&self, id: MileageLogId) -> Result<MileageLog, PortError>;

    /// Fetches the trips strictly later than the given trip in its log,
    /// earliest first
    async fn later_trips(&self, trip: &Trip) -> Result<Vec<Trip>, PortError>;

    /// Fetches all active members
    async fn active_members(&self) -> Result<Vec<Member>, PortError>;

    /// Fetches all active vehicles
    async fn active_vehicles(&self) -> Result<Vec<Vehicle>, PortError>;

    /// Fetches every mileage log covering the given billing period
    async fn mileage_logs_by_period(
        &self,
        period: BillingPeriod,
    ) -> Result<Vec<MileageLog>, PortError>;

    /// Persists an edited trip together with the cascaded updates to later
    /// trips.
    ///
    /// The write MUST be atomic: either every trip in the slice is stored
    /// or none is. A partial write would leave the log with adjacent trips
    /// whose mileages no longer line up.
    async fn save_trips(&self, trips: &[Trip]) -> Result<(), PortError>;
}

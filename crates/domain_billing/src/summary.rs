//! Monthly billing summary
//!
//! Aggregates the per-vehicle billings of one calendar month into the
//! member-by-vehicle statement the club publishes: one row per member, a
//! pair of columns per vehicle (regular and long-distance), and a trailing
//! total column. The builder only reads the billings it is given.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use core_kernel::{BillingPeriod, MemberId, Usd, VehicleId};
use domain_fleet::{Member, Vehicle};

use crate::allocation::MileageLogBilling;

/// One member's row of the summary table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRow {
    pub member_id: MemberId,
    pub member_name: String,
    /// Two cells per vehicle, in vehicle order: regular cost, then
    /// long-distance cost. A vehicle with no billing entry for the member
    /// contributes zeros, never an absent cell.
    pub cells: Vec<Usd>,
    /// Sum across every vehicle column
    pub total: Usd,
}

/// The member-by-vehicle billing statement for one month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingSummary {
    pub period: BillingPeriod,
    /// Column headers: `Member`, then per vehicle `<name>` and `<name> LD`,
    /// then `Total`
    pub columns: Vec<String>,
    /// One row per member, in the supplied member order
    pub rows: Vec<SummaryRow>,
}

impl BillingSummary {
    /// Sum of every row's total
    pub fn grand_total(&self) -> Usd {
        self.rows
            .iter()
            .fold(Usd::ZERO, |acc, row| acc + row.total)
    }
}

/// Builds the summary statement for one billing period
///
/// `billings_by_vehicle` holds each vehicle's mileage-log billing for the
/// period. Members and vehicles are emitted in the order supplied, so the
/// statement layout is stable.
pub fn build_summary(
    billings_by_vehicle: &HashMap<VehicleId, MileageLogBilling>,
    members: &[Member],
    vehicles: &[Vehicle],
    period: BillingPeriod,
) -> BillingSummary {
    let mut columns = Vec::with_capacity(vehicles.len() * 2 + 2);
    columns.push("Member".to_string());
    for vehicle in vehicles {
        columns.push(vehicle.name.clone());
        columns.push(format!("{} LD", vehicle.name));
    }
    columns.push("Total".to_string());

    let rows = members
        .iter()
        .map(|member| {
            let mut cells = Vec::with_capacity(vehicles.len() * 2);
            let mut total = Usd::ZERO;

            for vehicle in vehicles {
                let (regular, long_distance) = billings_by_vehicle
                    .get(&vehicle.id)
                    .and_then(|billing| billing.member_billings.get(&member.id))
                    .map(|entry| (entry.regular_trips_cost, entry.long_distance_trips_cost))
                    .unwrap_or((Usd::ZERO, Usd::ZERO));

                cells.push(regular);
                total += regular;
                cells.push(long_distance);
                total += long_distance;
            }

            SummaryRow {
                member_id: member.id,
                member_name: member.name.clone(),
                cells,
                total,
            }
        })
        .collect();

    BillingSummary {
        period,
        columns,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::MemberBilling;
    use core_kernel::MileageLogId;

    fn member(name: &str) -> Member {
        Member::new(MemberId::new(), name)
    }

    fn billing_for(member_id: MemberId, regular: i64, ld: i64) -> MileageLogBilling {
        let entry = MemberBilling {
            member_id,
            regular_trips_cost: Usd::from_cents(regular),
            long_distance_trips_cost: Usd::from_cents(ld),
        };
        MileageLogBilling {
            mileage_log_id: MileageLogId::new(),
            total_trip_cost: entry.total(),
            total_member_billings: entry.total(),
            member_billings: HashMap::from([(member_id, entry)]),
        }
    }

    #[test]
    fn test_column_header_order() {
        let vehicles = [
            Vehicle::new(VehicleId::new(), "Sedan"),
            Vehicle::new(VehicleId::new(), "Truck"),
        ];
        let period = BillingPeriod::new(2024, 6).unwrap();

        let summary = build_summary(&HashMap::new(), &[], &vehicles, period);

        assert_eq!(
            summary.columns,
            vec!["Member", "Sedan", "Sedan LD", "Truck", "Truck LD", "Total"]
        );
    }

    #[test]
    fn test_missing_vehicle_entry_is_zero() {
        let ana = member("Ana");
        let sedan = Vehicle::new(VehicleId::new(), "Sedan");
        let truck = Vehicle::new(VehicleId::new(), "Truck");
        let period = BillingPeriod::new(2024, 6).unwrap();

        // Ana only rode the sedan this month.
        let billings = HashMap::from([(sedan.id, billing_for(ana.id, 290, 0))]);

        let summary = build_summary(
            &billings,
            std::slice::from_ref(&ana),
            &[sedan, truck],
            period,
        );

        let row = &summary.rows[0];
        assert_eq!(row.cells, vec![
            Usd::from_cents(290),
            Usd::ZERO,
            Usd::ZERO,
            Usd::ZERO,
        ]);
        assert_eq!(row.total, Usd::from_cents(290));
    }

    #[test]
    fn test_rows_follow_member_order() {
        let ana = member("Ana");
        let ben = member("Ben");
        let period = BillingPeriod::new(2024, 6).unwrap();

        let summary = build_summary(
            &HashMap::new(),
            &[ben.clone(), ana.clone()],
            &[],
            period,
        );

        assert_eq!(summary.rows[0].member_name, "Ben");
        assert_eq!(summary.rows[1].member_name, "Ana");
    }

    #[test]
    fn test_grand_total_sums_rows() {
        let ana = member("Ana");
        let sedan = Vehicle::new(VehicleId::new(), "Sedan");
        let period = BillingPeriod::new(2024, 6).unwrap();
        let billings = HashMap::from([(sedan.id, billing_for(ana.id, 290, 15000))]);

        let summary = build_summary(&billings, std::slice::from_ref(&ana), &[sedan], period);

        assert_eq!(summary.grand_total(), Usd::from_cents(15290));
    }
}

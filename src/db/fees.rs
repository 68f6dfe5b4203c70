use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TollBooth {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(with = "rust_decimal::serde::float")]
    pub fee: Decimal,
}

#[derive(Debug, Serialize)]
pub struct VehicleType {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(with = "rust_decimal::serde::float")]
    pub multiplier: Decimal,
}

// static reference sets, not persisted or mutated at runtime
pub const TOLL_BOOTHS: [TollBooth; 5] = [
    TollBooth { id: "TB001", name: "Highway 101 North", fee: dec!(5.50) },
    TollBooth { id: "TB002", name: "Interstate 95 South", fee: dec!(7.25) },
    TollBooth { id: "TB003", name: "Route 66 East", fee: dec!(4.75) },
    TollBooth { id: "TB004", name: "Pacific Coast Highway", fee: dec!(6.00) },
    TollBooth { id: "TB005", name: "Golden Gate Bridge", fee: dec!(8.50) },
];

pub const VEHICLE_TYPES: [VehicleType; 4] = [
    VehicleType { id: "car", label: "Car", multiplier: dec!(1) },
    VehicleType { id: "motorcycle", label: "Motorcycle", multiplier: dec!(0.5) },
    VehicleType { id: "truck", label: "Truck", multiplier: dec!(2) },
    VehicleType { id: "bus", label: "Bus", multiplier: dec!(1.5) },
];

pub fn find_booth(booth_id: &str) -> Option<&'static TollBooth> {
    TOLL_BOOTHS.iter().find(|booth| booth.id == booth_id)
}

pub fn find_vehicle_type(vehicle_type_id: &str) -> Option<&'static VehicleType> {
    VEHICLE_TYPES.iter().find(|vehicle| vehicle.id == vehicle_type_id)
}

// pure fee calculation; an unknown booth quotes 0 and an unknown vehicle
// type falls back to multiplier 1
pub fn compute_amount(booth_id: &str, vehicle_type_id: &str) -> Decimal {
    let fee = find_booth(booth_id).map(|booth| booth.fee).unwrap_or(Decimal::ZERO);
    let multiplier = find_vehicle_type(vehicle_type_id)
        .map(|vehicle| vehicle.multiplier)
        .unwrap_or(Decimal::ONE);

    fee * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_is_fee_times_multiplier_for_all_pairs() {
        for booth in &TOLL_BOOTHS {
            for vehicle in &VEHICLE_TYPES {
                assert_eq!(
                    compute_amount(booth.id, vehicle.id),
                    booth.fee * vehicle.multiplier
                );
            }
        }
    }

    #[test]
    fn test_truck_at_tb001_pays_eleven() {
        assert_eq!(compute_amount("TB001", "truck"), dec!(11.00));
    }

    #[test]
    fn test_unknown_booth_quotes_zero() {
        assert_eq!(compute_amount("TB999", "car"), Decimal::ZERO);
    }

    #[test]
    fn test_unknown_vehicle_type_defaults_to_base_fee() {
        assert_eq!(compute_amount("TB002", "hovercraft"), dec!(7.25));
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use fleetdeck_app::{
    Order, OrderId, OrderType, ShipmentStatus, Trip, TripId, TripStatus, UserAccount, UserId,
    UserPlan, UserRole, UserStatus, Vehicle, VehicleId, VehicleStatus, VehicleType,
};
use time::{Date, Duration, Month, PrimitiveDateTime, Time};

const FIRST_NAMES: [&str; 16] = [
    "Avery", "Jordan", "Taylor", "Riley", "Morgan", "Casey", "Alex", "Quinn", "Parker", "Drew",
    "Kai", "Elliot", "Robin", "Cameron", "Hayden", "Rowan",
];
const LAST_NAMES: [&str; 18] = [
    "Walker", "Martin", "Hill", "Evans", "Lopez", "Gray", "Ward", "Young", "Diaz", "Reed",
    "Campbell", "Turner", "Flores", "Bennett", "Price", "Morris", "Foster", "Brooks",
];

const CITIES: [&str; 12] = [
    "Paris, France",
    "Lyon, France",
    "Berlin, Germany",
    "Hamburg, Germany",
    "Amsterdam, Netherlands",
    "Madrid, Spain",
    "Valencia, Spain",
    "Rome, Italy",
    "Naples, Italy",
    "Vienna, Austria",
    "Zurich, Switzerland",
    "Prague, Czechia",
];

const MAKES: [&str; 8] = [
    "Volvo", "Scania", "MAN", "DAF", "Iveco", "Mercedes", "Renault", "Ford",
];
const MODELS: [&str; 8] = [
    "FH16", "R450", "TGX", "XF", "S-Way", "Actros", "T High", "F-Max",
];

const COMPANY_SUFFIXES: [&str; 6] = ["Logistics", "Freight", "Cargo", "Haulage", "Express", "Lines"];

/// Small LCG with an xorshift output mix; keeps fixtures reproducible
/// without pulling in a random-number crate.
#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn int_range_i64(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        low + (self.next_u64() % ((high - low) as u64)) as i64
    }
}

#[derive(Debug, Clone)]
pub struct FleetFaker {
    rng: DeterministicRng,
}

impl FleetFaker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: DeterministicRng::new(seed),
        }
    }

    fn pick<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        pool[self.rng.int_n(pool.len())]
    }

    fn person_name(&mut self) -> String {
        format!("{} {}", self.pick(&FIRST_NAMES), self.pick(&LAST_NAMES))
    }

    fn license_plate(&mut self) -> String {
        let letters: String = (0..3)
            .map(|_| (b'A' + self.rng.int_n(26) as u8) as char)
            .collect();
        format!("{letters}-{:04}", self.rng.int_range_i64(1000, 10_000))
    }

    fn day_in_july(&mut self) -> PrimitiveDateTime {
        let day = 1 + self.rng.int_n(28) as u8;
        let date = Date::from_calendar_date(2024, Month::July, day)
            .unwrap_or_else(|_| Date::from_calendar_date(2024, Month::July, 1).expect("valid date"));
        let hour = self.rng.int_n(24) as u8;
        PrimitiveDateTime::new(date, Time::from_hms(hour, 0, 0).expect("valid time"))
    }

    pub fn trip(&mut self, id: i64) -> Trip {
        let start_time = self.day_in_july();
        let end_time = start_time + Duration::hours(self.rng.int_range_i64(3, 14));
        let stop_count = self.rng.int_n(3);
        let stops = (0..stop_count)
            .map(|_| self.pick(&CITIES).to_owned())
            .collect();
        let status = TripStatus::ALL[self.rng.int_n(TripStatus::ALL.len())];

        Trip {
            id: TripId::new(id),
            vehicle: self.license_plate(),
            driver: self.person_name(),
            start_location: self.pick(&CITIES).to_owned(),
            stops,
            end_location: self.pick(&CITIES).to_owned(),
            start_time,
            end_time,
            status,
            distance_km: self.rng.int_range_i64(150, 2_000),
            notes: String::new(),
        }
    }

    pub fn vehicle(&mut self, id: i64) -> Vehicle {
        let last_service = if self.rng.int_n(4) == 0 {
            None
        } else {
            Some(self.day_in_july().date() - Duration::days(self.rng.int_range_i64(10, 180)))
        };

        Vehicle {
            id: VehicleId::new(id),
            license_plate: self.license_plate(),
            make: self.pick(&MAKES).to_owned(),
            model: self.pick(&MODELS).to_owned(),
            year: self.rng.int_range_i64(2008, 2025) as i32,
            vehicle_type: VehicleType::ALL[self.rng.int_n(VehicleType::ALL.len())],
            status: VehicleStatus::ALL[self.rng.int_n(VehicleStatus::ALL.len())],
            location: self.pick(&CITIES).to_owned(),
            driver: self.person_name(),
            last_service_date: last_service,
            warnings: self.rng.int_range_i64(0, 4),
            progress: self.rng.int_range_i64(0, 101),
        }
    }

    pub fn user_account(&mut self, id: i64) -> UserAccount {
        let full_name = self.person_name();
        let username = full_name.to_ascii_lowercase().replace(' ', ".");
        let email = format!("{username}@fleetdeck.test");

        UserAccount {
            id: UserId::new(id),
            full_name,
            username,
            email,
            role: UserRole::ALL[self.rng.int_n(UserRole::ALL.len())],
            plan: UserPlan::ALL[self.rng.int_n(UserPlan::ALL.len())],
            status: UserStatus::ALL[self.rng.int_n(UserStatus::ALL.len())],
        }
    }

    pub fn order(&mut self, id: i64) -> Order {
        let customer = format!("{} {}", self.pick(&LAST_NAMES), self.pick(&COMPANY_SUFFIXES));

        Order {
            id: OrderId::new(id),
            order_number: 4_000 + id,
            po: format!("PO-{:05}", self.rng.int_range_i64(10_000, 100_000)),
            customer,
            shipment_status: ShipmentStatus::ALL[self.rng.int_n(ShipmentStatus::ALL.len())],
            order_type: OrderType::ALL[self.rng.int_n(OrderType::ALL.len())],
            placed_at: self.day_in_july(),
        }
    }

    pub fn trips(&mut self, count: usize) -> Vec<Trip> {
        (1..=count as i64).map(|id| self.trip(id)).collect()
    }

    pub fn vehicles(&mut self, count: usize) -> Vec<Vehicle> {
        (1..=count as i64).map(|id| self.vehicle(id)).collect()
    }

    pub fn user_accounts(&mut self, count: usize) -> Vec<UserAccount> {
        (1..=count as i64).map(|id| self.user_account(id)).collect()
    }

    pub fn orders(&mut self, count: usize) -> Vec<Order> {
        (1..=count as i64).map(|id| self.order(id)).collect()
    }
}

fn fixed_trip(
    id: i64,
    vehicle: &str,
    driver: &str,
    start_location: &str,
    stops: &[&str],
    end_location: &str,
    start_time: PrimitiveDateTime,
    end_time: PrimitiveDateTime,
    status: TripStatus,
    distance_km: i64,
    notes: &str,
) -> Trip {
    Trip {
        id: TripId::new(id),
        vehicle: vehicle.to_owned(),
        driver: driver.to_owned(),
        start_location: start_location.to_owned(),
        stops: stops.iter().map(|stop| (*stop).to_owned()).collect(),
        end_location: end_location.to_owned(),
        start_time,
        end_time,
        status,
        distance_km,
        notes: notes.to_owned(),
    }
}

fn july(day: u8, hour: u8, minute: u8) -> PrimitiveDateTime {
    PrimitiveDateTime::new(
        Date::from_calendar_date(2024, Month::July, day).expect("valid fixture date"),
        Time::from_hms(hour, minute, 0).expect("valid fixture time"),
    )
}

/// The four trips the dashboard ships as hardcoded mock data, statuses
/// active / completed / cancelled / active.
pub fn sample_trips() -> Vec<Trip> {
    vec![
        fixed_trip(
            1,
            "ABC-1234",
            "Veronica Herman",
            "Paris, France",
            &["Lyon, France", "Zurich, Switzerland"],
            "Rome, Italy",
            july(1, 8, 0),
            july(1, 20, 0),
            TripStatus::Active,
            1_420,
            "Multi-stop delivery route",
        ),
        fixed_trip(
            2,
            "XYZ-5678",
            "Frank Jones",
            "Berlin, Germany",
            &["Hamburg, Germany"],
            "Amsterdam, Netherlands",
            july(2, 9, 0),
            july(2, 18, 30),
            TripStatus::Completed,
            650,
            "Delivered on time",
        ),
        fixed_trip(
            3,
            "JKL-9101",
            "Helen Jacobs",
            "Madrid, Spain",
            &[],
            "Valencia, Spain",
            july(3, 7, 30),
            july(3, 11, 0),
            TripStatus::Cancelled,
            350,
            "Trip cancelled due to maintenance",
        ),
        fixed_trip(
            4,
            "MNO-2345",
            "William Miller",
            "Rome, Italy",
            &["Naples, Italy"],
            "Vienna, Austria",
            july(4, 10, 0),
            july(4, 22, 0),
            TripStatus::Active,
            1_120,
            "",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::{FleetFaker, sample_trips};
    use fleetdeck_app::TripStatus;

    #[test]
    fn same_seed_reproduces_the_same_fixtures() {
        let mut left = FleetFaker::new(42);
        let mut right = FleetFaker::new(42);
        assert_eq!(left.trips(10), right.trips(10));
        assert_eq!(left.vehicles(5), right.vehicles(5));
    }

    #[test]
    fn different_seeds_diverge() {
        let mut left = FleetFaker::new(1);
        let mut right = FleetFaker::new(2);
        assert_ne!(left.trips(10), right.trips(10));
    }

    #[test]
    fn generated_trips_have_sequential_ids_and_sane_ranges() {
        let mut faker = FleetFaker::new(7);
        let trips = faker.trips(20);
        for (index, trip) in trips.iter().enumerate() {
            assert_eq!(trip.id.get(), index as i64 + 1);
            assert!(trip.end_time >= trip.start_time);
            assert!((150..2_000).contains(&trip.distance_km));
        }
    }

    #[test]
    fn sample_trips_match_the_mock_dataset() {
        let trips = sample_trips();
        assert_eq!(trips.len(), 4);
        let statuses: Vec<TripStatus> = trips.iter().map(|trip| trip.status).collect();
        assert_eq!(statuses, vec![
            TripStatus::Active,
            TripStatus::Completed,
            TripStatus::Cancelled,
            TripStatus::Active,
        ]);
        assert_eq!(trips[0].driver, "Veronica Herman");
        assert_eq!(trips[2].stops.len(), 0);
    }

    #[test]
    fn user_emails_derive_from_usernames() {
        let mut faker = FleetFaker::new(3);
        let users = faker.user_accounts(8);
        for user in users {
            assert!(user.email.starts_with(&user.username));
            assert!(user.email.ends_with("@fleetdeck.test"));
            assert!(!user.username.contains(' '));
        }
    }

    #[test]
    fn vehicle_progress_is_a_percentage() {
        let mut faker = FleetFaker::new(11);
        for vehicle in faker.vehicles(25) {
            assert!((0..=100).contains(&vehicle.progress));
            assert!((2008..2025).contains(&vehicle.year));
        }
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use time::PrimitiveDateTime;

use crate::{
    FormKind, Trip, TripId, TripStatus, UserAccount, UserId, UserPlan, UserRole, UserStatus,
    Vehicle, VehicleId, VehicleStatus, VehicleType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripFormInput {
    pub vehicle: String,
    pub driver: String,
    pub start_location: String,
    pub stops: Vec<String>,
    pub end_location: String,
    pub start_time: Option<PrimitiveDateTime>,
    pub end_time: Option<PrimitiveDateTime>,
    pub status: Option<TripStatus>,
    pub distance_km: Option<i64>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleFormInput {
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub year: Option<i32>,
    pub vehicle_type: Option<VehicleType>,
    pub status: Option<VehicleStatus>,
    pub location: String,
    pub driver: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFormInput {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub role: Option<UserRole>,
    pub plan: Option<UserPlan>,
    pub status: Option<UserStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPayload {
    Trip(TripFormInput),
    Vehicle(VehicleFormInput),
    User(UserFormInput),
}

impl FormPayload {
    pub fn kind(&self) -> FormKind {
        match self {
            Self::Trip(_) => FormKind::Trip,
            Self::Vehicle(_) => FormKind::Vehicle,
            Self::User(_) => FormKind::User,
        }
    }

    pub fn blank_for(kind: FormKind) -> Self {
        match kind {
            FormKind::Trip => Self::Trip(TripFormInput {
                vehicle: String::new(),
                driver: String::new(),
                start_location: String::new(),
                stops: Vec::new(),
                end_location: String::new(),
                start_time: None,
                end_time: None,
                status: None,
                distance_km: None,
                notes: String::new(),
            }),
            FormKind::Vehicle => Self::Vehicle(VehicleFormInput {
                license_plate: String::new(),
                make: String::new(),
                model: String::new(),
                year: None,
                vehicle_type: None,
                status: None,
                location: String::new(),
                driver: String::new(),
            }),
            FormKind::User => Self::User(UserFormInput {
                full_name: String::new(),
                username: String::new(),
                email: String::new(),
                role: None,
                plan: None,
                status: None,
            }),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Trip(trip) => trip.validate(),
            Self::Vehicle(vehicle) => vehicle.validate(),
            Self::User(user) => user.validate(),
        }
    }
}

impl TripFormInput {
    pub fn validate(&self) -> Result<()> {
        if self.vehicle.trim().is_empty() {
            bail!("trip vehicle is required -- pick a vehicle and retry");
        }
        if self.driver.trim().is_empty() {
            bail!("trip driver is required -- enter a driver name and retry");
        }
        if self.status.is_none() {
            bail!("trip status is required -- choose a status and retry");
        }
        if let (Some(start), Some(end)) = (self.start_time, self.end_time)
            && end < start
        {
            bail!("trip end time must be on/after start time");
        }
        if let Some(distance) = self.distance_km
            && distance < 0
        {
            bail!("trip distance cannot be negative");
        }
        Ok(())
    }

    pub fn into_record(self, id: TripId) -> Result<Trip> {
        self.validate()?;
        let status = self.status.unwrap_or(TripStatus::Active);
        let Some(start_time) = self.start_time else {
            bail!("trip start time is required -- pick a start time and retry");
        };
        Ok(Trip {
            id,
            vehicle: self.vehicle,
            driver: self.driver,
            start_location: self.start_location,
            stops: self.stops,
            end_location: self.end_location,
            start_time,
            end_time: self.end_time.unwrap_or(start_time),
            status,
            distance_km: self.distance_km.unwrap_or(0),
            notes: self.notes,
        })
    }
}

impl VehicleFormInput {
    pub fn validate(&self) -> Result<()> {
        if self.license_plate.trim().is_empty() {
            bail!("vehicle license plate is required -- enter a plate and retry");
        }
        if let Some(year) = self.year
            && !(1980..=2030).contains(&year)
        {
            bail!("vehicle year must fall between 1980 and 2030");
        }
        if self.vehicle_type.is_none() {
            bail!("vehicle type is required -- choose a type and retry");
        }
        if self.status.is_none() {
            bail!("vehicle status is required -- choose a status and retry");
        }
        Ok(())
    }

    pub fn into_record(self, id: VehicleId) -> Result<Vehicle> {
        self.validate()?;
        Ok(Vehicle {
            id,
            license_plate: self.license_plate,
            make: self.make,
            model: self.model,
            year: self.year.unwrap_or(2020),
            vehicle_type: self.vehicle_type.unwrap_or(VehicleType::Truck),
            status: self.status.unwrap_or(VehicleStatus::Active),
            location: self.location,
            driver: self.driver,
            last_service_date: None,
            warnings: 0,
            progress: 0,
        })
    }
}

impl UserFormInput {
    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            bail!("user full name is required -- enter a name and retry");
        }
        if self.username.trim().is_empty() {
            bail!("username is required -- enter a username and retry");
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') || email.starts_with('@') {
            bail!("user email looks invalid -- enter a full address and retry");
        }
        if self.role.is_none() {
            bail!("user role is required -- choose a role and retry");
        }
        Ok(())
    }

    pub fn into_record(self, id: UserId) -> Result<UserAccount> {
        self.validate()?;
        Ok(UserAccount {
            id,
            full_name: self.full_name,
            username: self.username,
            email: self.email,
            role: self.role.unwrap_or(UserRole::Subscriber),
            plan: self.plan.unwrap_or(UserPlan::Basic),
            status: self.status.unwrap_or(UserStatus::Pending),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FormPayload, TripFormInput, UserFormInput, VehicleFormInput};
    use crate::{FormKind, TripId, TripStatus, UserRole, VehicleId, VehicleStatus, VehicleType};
    use time::macros::datetime;

    fn trip_form() -> TripFormInput {
        TripFormInput {
            vehicle: "ABC-1234".to_owned(),
            driver: "Veronica Herman".to_owned(),
            start_location: "Paris, France".to_owned(),
            stops: vec!["Lyon, France".to_owned()],
            end_location: "Rome, Italy".to_owned(),
            start_time: Some(datetime!(2024-07-01 08:00)),
            end_time: Some(datetime!(2024-07-01 20:00)),
            status: Some(TripStatus::Active),
            distance_km: Some(1_420),
            notes: String::new(),
        }
    }

    #[test]
    fn blank_payloads_validate_as_incomplete() {
        for kind in [FormKind::Trip, FormKind::Vehicle, FormKind::User] {
            assert!(FormPayload::blank_for(kind).validate().is_err());
        }
    }

    #[test]
    fn valid_trip_form_builds_a_record() {
        let trip = trip_form()
            .into_record(TripId::new(5))
            .expect("valid trip form");
        assert_eq!(trip.id, TripId::new(5));
        assert_eq!(trip.status, TripStatus::Active);
        assert_eq!(trip.distance_km, 1_420);
    }

    #[test]
    fn trip_validation_rejects_reversed_time_range() {
        let mut form = trip_form();
        form.end_time = Some(datetime!(2024-06-30 08:00));
        assert!(form.validate().is_err());
    }

    #[test]
    fn trip_validation_requires_a_status() {
        let mut form = trip_form();
        form.status = None;
        assert!(form.validate().is_err());
    }

    #[test]
    fn trip_validation_rejects_negative_distance() {
        let mut form = trip_form();
        form.distance_km = Some(-5);
        assert!(form.validate().is_err());
    }

    #[test]
    fn vehicle_validation_checks_plate_and_year() {
        let mut form = VehicleFormInput {
            license_plate: "XYZ-5678".to_owned(),
            make: "Volvo".to_owned(),
            model: "FH16".to_owned(),
            year: Some(2022),
            vehicle_type: Some(VehicleType::Truck),
            status: Some(VehicleStatus::Active),
            location: "Berlin, Germany".to_owned(),
            driver: "Frank Jones".to_owned(),
        };
        assert!(form.validate().is_ok());

        form.year = Some(1899);
        assert!(form.validate().is_err());

        form.year = Some(2022);
        form.license_plate = " ".to_owned();
        assert!(form.validate().is_err());
    }

    #[test]
    fn vehicle_form_builds_a_record_with_defaults() {
        let form = VehicleFormInput {
            license_plate: "JKL-9101".to_owned(),
            make: "MAN".to_owned(),
            model: "TGX".to_owned(),
            year: None,
            vehicle_type: Some(VehicleType::Van),
            status: Some(VehicleStatus::Maintenance),
            location: String::new(),
            driver: String::new(),
        };
        let vehicle = form
            .into_record(VehicleId::new(9))
            .expect("valid vehicle form");
        assert_eq!(vehicle.year, 2020);
        assert!(vehicle.last_service_date.is_none());
        assert_eq!(vehicle.warnings, 0);
    }

    #[test]
    fn user_validation_rejects_malformed_email() {
        let mut form = UserFormInput {
            full_name: "Helen Jacobs".to_owned(),
            username: "hjacobs".to_owned(),
            email: "helen.example.com".to_owned(),
            role: Some(UserRole::Editor),
            plan: None,
            status: None,
        };
        assert!(form.validate().is_err());

        form.email = "@example.com".to_owned();
        assert!(form.validate().is_err());

        form.email = "helen@example.com".to_owned();
        assert!(form.validate().is_ok());
    }
}

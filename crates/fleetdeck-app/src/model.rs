// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime};

use crate::ids::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Active,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Completed, Self::Cancelled];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Truck,
    Van,
    Trailer,
}

impl VehicleType {
    pub const ALL: [Self; 3] = [Self::Truck, Self::Van, Self::Trailer];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Truck => "truck",
            Self::Van => "van",
            Self::Trailer => "trailer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "truck" => Some(Self::Truck),
            "van" => Some(Self::Van),
            "trailer" => Some(Self::Trailer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Inactive,
}

impl VehicleStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Maintenance, Self::Inactive];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Maintenance => "maintenance",
            Self::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "maintenance" => Some(Self::Maintenance),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Author,
    Editor,
    Maintainer,
    Subscriber,
}

impl UserRole {
    pub const ALL: [Self; 5] = [
        Self::Admin,
        Self::Author,
        Self::Editor,
        Self::Maintainer,
        Self::Subscriber,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Author => "author",
            Self::Editor => "editor",
            Self::Maintainer => "maintainer",
            Self::Subscriber => "subscriber",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "author" => Some(Self::Author),
            "editor" => Some(Self::Editor),
            "maintainer" => Some(Self::Maintainer),
            "subscriber" => Some(Self::Subscriber),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserPlan {
    Basic,
    Team,
    Company,
    Enterprise,
}

impl UserPlan {
    pub const ALL: [Self; 4] = [Self::Basic, Self::Team, Self::Company, Self::Enterprise];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Team => "team",
            Self::Company => "company",
            Self::Enterprise => "enterprise",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "basic" => Some(Self::Basic),
            "team" => Some(Self::Team),
            "company" => Some(Self::Company),
            "enterprise" => Some(Self::Enterprise),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Pending,
    Inactive,
}

impl UserStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Pending, Self::Inactive];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "pending" => Some(Self::Pending),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Scheduled,
    InTransit,
    OutForDelivery,
    Delivered,
}

impl ShipmentStatus {
    pub const ALL: [Self; 4] = [
        Self::Scheduled,
        Self::InTransit,
        Self::OutForDelivery,
        Self::Delivered,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InTransit => "in_transit",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "scheduled" => Some(Self::Scheduled),
            "in_transit" => Some(Self::InTransit),
            "out_for_delivery" => Some(Self::OutForDelivery),
            "delivered" => Some(Self::Delivered),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Standard,
    Express,
}

impl OrderType {
    pub const ALL: [Self; 2] = [Self::Standard, Self::Express];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "standard" => Some(Self::Standard),
            "express" => Some(Self::Express),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabKind {
    Fleet,
    Trips,
    Vehicles,
    Users,
    Orders,
}

impl TabKind {
    pub const ALL: [Self; 5] = [
        Self::Fleet,
        Self::Trips,
        Self::Vehicles,
        Self::Users,
        Self::Orders,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fleet => "fleet",
            Self::Trips => "trips",
            Self::Vehicles => "vehicles",
            Self::Users => "users",
            Self::Orders => "orders",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fleet" => Some(Self::Fleet),
            "trips" => Some(Self::Trips),
            "vehicles" => Some(Self::Vehicles),
            "users" => Some(Self::Users),
            "orders" => Some(Self::Orders),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormKind {
    Trip,
    Vehicle,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppMode {
    Browse,
    Drawer(FormKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub vehicle: String,
    pub driver: String,
    pub start_location: String,
    pub stops: Vec<String>,
    pub end_location: String,
    pub start_time: PrimitiveDateTime,
    pub end_time: PrimitiveDateTime,
    pub status: TripStatus,
    pub distance_km: i64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vehicle_type: VehicleType,
    pub status: VehicleStatus,
    pub location: String,
    pub driver: String,
    pub last_service_date: Option<Date>,
    pub warnings: i64,
    pub progress: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub plan: UserPlan,
    pub status: UserStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: i64,
    pub po: String,
    pub customer: String,
    pub shipment_status: ShipmentStatus,
    pub order_type: OrderType,
    pub placed_at: PrimitiveDateTime,
}

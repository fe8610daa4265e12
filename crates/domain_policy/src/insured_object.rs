//! Insured objects
//!
//! The object covered by a policy, modeled as a tagged union rather than
//! a generic relation: today that is a car with its mark/model reference
//! hierarchy, with room for other object kinds.

use serde::{Deserialize, Serialize};

use core_kernel::{CarId, InsuredObjectId};
use domain_party::Person;

/// Car mark reference entry (e.g. "BMW")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarMark {
    pub title: String,
}

impl CarMark {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Car model group reference entry (e.g. "46")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarModelGroup {
    pub title: String,
}

impl CarModelGroup {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Car model reference entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarModel {
    /// Identifier of the model in the motor insurers' registry
    pub rsa_car_id: String,
    pub model_group: Option<CarModelGroup>,
}

impl CarModel {
    pub fn new(rsa_car_id: impl Into<String>) -> Self {
        Self {
            rsa_car_id: rsa_car_id.into(),
            model_group: None,
        }
    }

    pub fn with_model_group(mut self, group: CarModelGroup) -> Self {
        self.model_group = Some(group);
        self
    }
}

/// A car being insured
///
/// Mark and model are optional: cars entered manually may lack the
/// reference data links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub mark: Option<CarMark>,
    pub model: Option<CarModel>,
}

impl Car {
    pub fn new() -> Self {
        Self {
            id: CarId::new(),
            mark: None,
            model: None,
        }
    }

    pub fn with_mark(mut self, mark: CarMark) -> Self {
        self.mark = Some(mark);
        self
    }

    pub fn with_model(mut self, model: CarModel) -> Self {
        self.model = Some(model);
        self
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new()
    }
}

/// What kind of object is insured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InsuredItem {
    Car(Car),
    Other { description: String },
}

impl InsuredItem {
    pub fn as_car(&self) -> Option<&Car> {
        match self {
            InsuredItem::Car(car) => Some(car),
            InsuredItem::Other { .. } => None,
        }
    }
}

/// The insured object attached to a policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuredObject {
    pub id: InsuredObjectId,
    pub item: InsuredItem,
    pub beneficiary: Option<Person>,
}

impl InsuredObject {
    pub fn new(item: InsuredItem) -> Self {
        Self {
            id: InsuredObjectId::new(),
            item,
            beneficiary: None,
        }
    }

    pub fn car(car: Car) -> Self {
        Self::new(InsuredItem::Car(car))
    }

    pub fn with_beneficiary(mut self, beneficiary: Person) -> Self {
        self.beneficiary = Some(beneficiary);
        self
    }
}

use std::{fmt::Display, str::FromStr};

use chrono::NaiveDate;

use crate::error::ParseRecordError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InventoryRecord {
    pub name: String,
    pub category: Category,
    pub status: Status,
    pub equipment: EquipmentType,
    pub utility: Utility,
    pub amount: u32,
    pub entry_date: NaiveDate,
}

impl InventoryRecord {
    /// Read only summary shown for rows outside of an edit session.
    pub fn summary(&self) -> String {
        format!(
            "{} - {} - {} - {} - {} - {} - {}",
            self.name,
            self.category,
            self.status,
            self.equipment,
            self.utility,
            self.amount,
            self.entry_date.format(DATE_FORMAT),
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Building {
    Giordano,
    SantoDomingo,
}

impl Display for Building {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Building::Giordano => write!(f, "Edificio Giordano"),
            Building::SantoDomingo => write!(f, "Edificio Santo Domingo"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Sala1E,
    LabSoftware,
    Sala1F,
    Sala2F,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Sala1E,
        Category::LabSoftware,
        Category::Sala1F,
        Category::Sala2F,
    ];

    pub const PLACEHOLDER: &'static str = "Seleccione la Sala";

    pub fn building(&self) -> Building {
        match self {
            Category::Sala1E | Category::LabSoftware => Building::Giordano,
            Category::Sala1F | Category::Sala2F => Building::SantoDomingo,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Sala1E => write!(f, "Sala 1E"),
            Category::LabSoftware => write!(f, "Lab. Software"),
            Category::Sala1F => write!(f, "Sala 1F"),
            Category::Sala2F => write!(f, "Sala 2F"),
        }
    }
}

impl FromStr for Category {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.to_string() == s.trim())
            .ok_or_else(|| ParseRecordError::UnknownCategory(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EquipmentType {
    Mouse,
    Teclado,
    Pantalla,
    Audifonos,
}

impl EquipmentType {
    pub const ALL: [EquipmentType; 4] = [
        EquipmentType::Mouse,
        EquipmentType::Teclado,
        EquipmentType::Pantalla,
        EquipmentType::Audifonos,
    ];

    pub const PLACEHOLDER: &'static str = "Seleccione el tipo de equipo";
}

impl Display for EquipmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EquipmentType::Mouse => write!(f, "Mouse"),
            EquipmentType::Teclado => write!(f, "Teclado"),
            EquipmentType::Pantalla => write!(f, "Pantalla"),
            EquipmentType::Audifonos => write!(f, "Audifonos"),
        }
    }
}

impl FromStr for EquipmentType {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EquipmentType::ALL
            .into_iter()
            .find(|equipment| equipment.to_string() == s.trim())
            .ok_or_else(|| ParseRecordError::UnknownEquipmentType(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Status {
    #[default]
    New,
    Used,
}

impl Status {
    pub fn from_used(used: bool) -> Self {
        if used {
            Status::Used
        } else {
            Status::New
        }
    }

    pub fn is_used(&self) -> bool {
        matches!(self, Status::Used)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::New => write!(f, "Nuevo"),
            Status::Used => write!(f, "Usado"),
        }
    }
}

impl FromStr for Status {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Nuevo" => Ok(Status::New),
            "Usado" => Ok(Status::Used),
            _ => Err(ParseRecordError::UnknownStatus(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Utility {
    #[default]
    Good,
    Bad,
}

impl Utility {
    pub fn from_good(good: bool) -> Self {
        if good {
            Utility::Good
        } else {
            Utility::Bad
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, Utility::Good)
    }
}

impl Display for Utility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Utility::Good => write!(f, "Bueno"),
            Utility::Bad => write!(f, "Malo"),
        }
    }
}

impl FromStr for Utility {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Bueno" => Ok(Utility::Good),
            "Malo" => Ok(Utility::Bad),
            _ => Err(ParseRecordError::UnknownUtility(s.to_string())),
        }
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub mod food_service;
pub mod nutrient_service;

/// URI part shared by the NDB food and nutrient endpoints.
pub const NDB_URI_PART: &str = "ndb";

/// Shared capability of every vehicle kind.
pub trait Describe {
    fn info(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct Vehicle {
    make: String,
    year: i32,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            year,
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl Describe for Vehicle {
    /// `Make:<make>, Year: <year>`; the missing space after the first colon is intentional.
    fn info(&self) -> String {
        format!("Make:{}, Year: {}", self.make, self.year)
    }
}

#[derive(Debug, Clone)]
pub struct Car {
    vehicle: Vehicle,
    model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: i32, model: impl Into<String>) -> Self {
        Self {
            vehicle: Vehicle::new(make, year),
            model: model.into(),
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn model_info(&self) -> String {
        format!("Model: {}", self.model)
    }
}

impl Describe for Car {
    fn info(&self) -> String {
        self.vehicle.info()
    }
}

use crate::record::{record_wire, Field, FieldDescriptor, Record, ToWire};
use serde_json::{Map, Value};

const ID: FieldDescriptor = FieldDescriptor::optional("id", "id");
const PET_ID: FieldDescriptor = FieldDescriptor::optional("pet_id", "petId");
const QUANTITY: FieldDescriptor = FieldDescriptor::optional("quantity", "quantity");
const SHIP_DATE: FieldDescriptor = FieldDescriptor::optional("ship_date", "shipDate");
const STATUS: FieldDescriptor = FieldDescriptor::optional("status", "status");
const COMPLETE: FieldDescriptor = FieldDescriptor::optional("complete", "complete");

/// A store order for a pet. All fields are optional, so an order parsed
/// from any object (including `{}`) is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    id: Field<i64>,
    pet_id: Field<i64>,
    quantity: Field<i32>,
    ship_date: Field<String>,
    status: Field<String>,
    complete: Field<bool>,
}

impl Order {
    pub fn id(&self) -> i64 {
        *self.id.value()
    }

    pub fn set_id(&mut self, id: i64) {
        self.id.set(id);
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id.set(id);
        self
    }

    pub fn pet_id(&self) -> i64 {
        *self.pet_id.value()
    }

    pub fn set_pet_id(&mut self, pet_id: i64) {
        self.pet_id.set(pet_id);
    }

    pub fn with_pet_id(mut self, pet_id: i64) -> Self {
        self.pet_id.set(pet_id);
        self
    }

    pub fn quantity(&self) -> i32 {
        *self.quantity.value()
    }

    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity.set(quantity);
    }

    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity.set(quantity);
        self
    }

    pub fn ship_date(&self) -> &str {
        self.ship_date.value()
    }

    pub fn set_ship_date(&mut self, ship_date: String) {
        self.ship_date.set(ship_date);
    }

    pub fn with_ship_date(mut self, ship_date: String) -> Self {
        self.ship_date.set(ship_date);
        self
    }

    pub fn status(&self) -> &str {
        self.status.value()
    }

    pub fn set_status(&mut self, status: String) {
        self.status.set(status);
    }

    pub fn with_status(mut self, status: String) -> Self {
        self.status.set(status);
        self
    }

    pub fn complete(&self) -> bool {
        *self.complete.value()
    }

    pub fn set_complete(&mut self, complete: bool) {
        self.complete.set(complete);
    }

    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete.set(complete);
        self
    }
}

impl Record for Order {
    const DESCRIPTORS: &'static [FieldDescriptor] =
        &[ID, PET_ID, QUANTITY, SHIP_DATE, STATUS, COMPLETE];

    fn read_object(&mut self, obj: &Map<String, Value>) {
        self.id.read_from(obj, &ID);
        self.pet_id.read_from(obj, &PET_ID);
        self.quantity.read_from(obj, &QUANTITY);
        self.ship_date.read_from(obj, &SHIP_DATE);
        self.status.read_from(obj, &STATUS);
        self.complete.read_from(obj, &COMPLETE);
    }

    fn to_object(&self) -> Map<String, Value> {
        let mut obj = Map::new();
        if self.id.is_set() {
            obj.insert(ID.wire.to_string(), self.id.value().to_wire());
        }
        if self.pet_id.is_set() {
            obj.insert(PET_ID.wire.to_string(), self.pet_id.value().to_wire());
        }
        if self.quantity.is_set() {
            obj.insert(QUANTITY.wire.to_string(), self.quantity.value().to_wire());
        }
        if self.ship_date.is_set() {
            obj.insert(SHIP_DATE.wire.to_string(), self.ship_date.value().to_wire());
        }
        if self.status.is_set() {
            obj.insert(STATUS.wire.to_string(), self.status.value().to_wire());
        }
        if self.complete.is_set() {
            obj.insert(COMPLETE.wire.to_string(), self.complete.value().to_wire());
        }
        obj
    }

    fn has_any_field(&self) -> bool {
        self.id.is_set()
            || self.pet_id.is_set()
            || self.quantity.is_set()
            || self.ship_date.is_set()
            || self.status.is_set()
            || self.complete.is_set()
    }

    fn is_valid(&self) -> bool {
        // No required properties.
        true
    }

    fn field_valid(&self, ident: &str) -> bool {
        match ident {
            "id" => self.id.is_valid(),
            "pet_id" => self.pet_id.is_valid(),
            "quantity" => self.quantity.is_valid(),
            "ship_date" => self.ship_date.is_valid(),
            "status" => self.status.is_valid(),
            "complete" => self.complete.is_valid(),
            _ => false,
        }
    }
}

record_wire!(Order);

use crate::record::{record_wire, Field, FieldDescriptor, Record, ToWire};
use serde_json::{Map, Value};

const ID: FieldDescriptor = FieldDescriptor::optional("id", "id");
const NAME: FieldDescriptor = FieldDescriptor::optional("name", "name");

/// A free-form tag attached to a pet. Both fields are optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    id: Field<i64>,
    name: Field<String>,
}

impl Tag {
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

    pub fn name(&self) -> &str {
        self.name.value()
    }

    pub fn set_name(&mut self, name: String) {
        self.name.set(name);
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name.set(name);
        self
    }
}

impl Record for Tag {
    const DESCRIPTORS: &'static [FieldDescriptor] = &[ID, NAME];

    fn read_object(&mut self, obj: &Map<String, Value>) {
        self.id.read_from(obj, &ID);
        self.name.read_from(obj, &NAME);
    }

    fn to_object(&self) -> Map<String, Value> {
        let mut obj = Map::new();
        if self.id.is_set() {
            obj.insert(ID.wire.to_string(), self.id.value().to_wire());
        }
        if self.name.is_set() {
            obj.insert(NAME.wire.to_string(), self.name.value().to_wire());
        }
        obj
    }

    fn has_any_field(&self) -> bool {
        self.id.is_set() || self.name.is_set()
    }

    fn is_valid(&self) -> bool {
        // No required properties.
        true
    }

    fn field_valid(&self, ident: &str) -> bool {
        match ident {
            "id" => self.id.is_valid(),
            "name" => self.name.is_valid(),
            _ => false,
        }
    }
}

record_wire!(Tag);

use crate::record::{record_wire, Field, FieldDescriptor, Record, ToWire};
use serde_json::{Map, Value};

const CODE: FieldDescriptor = FieldDescriptor::optional("code", "code");
// `type` is a keyword, so the accessor name is `kind`; the wire key is
// unchanged.
const KIND: FieldDescriptor = FieldDescriptor::optional("kind", "type");
const MESSAGE: FieldDescriptor = FieldDescriptor::optional("message", "message");

/// Generic operation response envelope. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponse {
    code: Field<i32>,
    kind: Field<String>,
    message: Field<String>,
}

impl ApiResponse {
    pub fn code(&self) -> i32 {
        *self.code.value()
    }

    pub fn set_code(&mut self, code: i32) {
        self.code.set(code);
    }

    pub fn with_code(mut self, code: i32) -> Self {
        self.code.set(code);
        self
    }

    pub fn kind(&self) -> &str {
        self.kind.value()
    }

    pub fn set_kind(&mut self, kind: String) {
        self.kind.set(kind);
    }

    pub fn with_kind(mut self, kind: String) -> Self {
        self.kind.set(kind);
        self
    }

    pub fn message(&self) -> &str {
        self.message.value()
    }

    pub fn set_message(&mut self, message: String) {
        self.message.set(message);
    }

    pub fn with_message(mut self, message: String) -> Self {
        self.message.set(message);
        self
    }
}

impl Record for ApiResponse {
    const DESCRIPTORS: &'static [FieldDescriptor] = &[CODE, KIND, MESSAGE];

    fn read_object(&mut self, obj: &Map<String, Value>) {
        self.code.read_from(obj, &CODE);
        self.kind.read_from(obj, &KIND);
        self.message.read_from(obj, &MESSAGE);
    }

    fn to_object(&self) -> Map<String, Value> {
        let mut obj = Map::new();
        if self.code.is_set() {
            obj.insert(CODE.wire.to_string(), self.code.value().to_wire());
        }
        if self.kind.is_set() {
            obj.insert(KIND.wire.to_string(), self.kind.value().to_wire());
        }
        if self.message.is_set() {
            obj.insert(MESSAGE.wire.to_string(), self.message.value().to_wire());
        }
        obj
    }

    fn has_any_field(&self) -> bool {
        self.code.is_set() || self.kind.is_set() || self.message.is_set()
    }

    fn is_valid(&self) -> bool {
        // No required properties.
        true
    }

    fn field_valid(&self, ident: &str) -> bool {
        match ident {
            "code" => self.code.is_valid(),
            "kind" => self.kind.is_valid(),
            "message" => self.message.is_valid(),
            _ => false,
        }
    }
}

record_wire!(ApiResponse);

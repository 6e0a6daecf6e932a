use crate::record::{record_wire, Field, FieldDescriptor, Record, ToWire};
use serde_json::{Map, Value};

const ID: FieldDescriptor = FieldDescriptor::optional("id", "id");
const USERNAME: FieldDescriptor = FieldDescriptor::optional("username", "username");
const FIRST_NAME: FieldDescriptor = FieldDescriptor::optional("first_name", "firstName");
const LAST_NAME: FieldDescriptor = FieldDescriptor::optional("last_name", "lastName");
const EMAIL: FieldDescriptor = FieldDescriptor::optional("email", "email");
const PASSWORD: FieldDescriptor = FieldDescriptor::optional("password", "password");
const PHONE: FieldDescriptor = FieldDescriptor::optional("phone", "phone");
const USER_STATUS: FieldDescriptor = FieldDescriptor::optional("user_status", "userStatus");

/// A store user account. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    id: Field<i64>,
    username: Field<String>,
    first_name: Field<String>,
    last_name: Field<String>,
    email: Field<String>,
    password: Field<String>,
    phone: Field<String>,
    user_status: Field<i32>,
}

impl User {
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

    pub fn username(&self) -> &str {
        self.username.value()
    }

    pub fn set_username(&mut self, username: String) {
        self.username.set(username);
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username.set(username);
        self
    }

    pub fn first_name(&self) -> &str {
        self.first_name.value()
    }

    pub fn set_first_name(&mut self, first_name: String) {
        self.first_name.set(first_name);
    }

    pub fn with_first_name(mut self, first_name: String) -> Self {
        self.first_name.set(first_name);
        self
    }

    pub fn last_name(&self) -> &str {
        self.last_name.value()
    }

    pub fn set_last_name(&mut self, last_name: String) {
        self.last_name.set(last_name);
    }

    pub fn with_last_name(mut self, last_name: String) -> Self {
        self.last_name.set(last_name);
        self
    }

    pub fn email(&self) -> &str {
        self.email.value()
    }

    pub fn set_email(&mut self, email: String) {
        self.email.set(email);
    }

    pub fn with_email(mut self, email: String) -> Self {
        self.email.set(email);
        self
    }

    pub fn password(&self) -> &str {
        self.password.value()
    }

    pub fn set_password(&mut self, password: String) {
        self.password.set(password);
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.password.set(password);
        self
    }

    pub fn phone(&self) -> &str {
        self.phone.value()
    }

    pub fn set_phone(&mut self, phone: String) {
        self.phone.set(phone);
    }

    pub fn with_phone(mut self, phone: String) -> Self {
        self.phone.set(phone);
        self
    }

    pub fn user_status(&self) -> i32 {
        *self.user_status.value()
    }

    pub fn set_user_status(&mut self, user_status: i32) {
        self.user_status.set(user_status);
    }

    pub fn with_user_status(mut self, user_status: i32) -> Self {
        self.user_status.set(user_status);
        self
    }
}

impl Record for User {
    const DESCRIPTORS: &'static [FieldDescriptor] = &[
        ID,
        USERNAME,
        FIRST_NAME,
        LAST_NAME,
        EMAIL,
        PASSWORD,
        PHONE,
        USER_STATUS,
    ];

    fn read_object(&mut self, obj: &Map<String, Value>) {
        self.id.read_from(obj, &ID);
        self.username.read_from(obj, &USERNAME);
        self.first_name.read_from(obj, &FIRST_NAME);
        self.last_name.read_from(obj, &LAST_NAME);
        self.email.read_from(obj, &EMAIL);
        self.password.read_from(obj, &PASSWORD);
        self.phone.read_from(obj, &PHONE);
        self.user_status.read_from(obj, &USER_STATUS);
    }

    fn to_object(&self) -> Map<String, Value> {
        let mut obj = Map::new();
        if self.id.is_set() {
            obj.insert(ID.wire.to_string(), self.id.value().to_wire());
        }
        if self.username.is_set() {
            obj.insert(USERNAME.wire.to_string(), self.username.value().to_wire());
        }
        if self.first_name.is_set() {
            obj.insert(
                FIRST_NAME.wire.to_string(),
                self.first_name.value().to_wire(),
            );
        }
        if self.last_name.is_set() {
            obj.insert(LAST_NAME.wire.to_string(), self.last_name.value().to_wire());
        }
        if self.email.is_set() {
            obj.insert(EMAIL.wire.to_string(), self.email.value().to_wire());
        }
        if self.password.is_set() {
            obj.insert(PASSWORD.wire.to_string(), self.password.value().to_wire());
        }
        if self.phone.is_set() {
            obj.insert(PHONE.wire.to_string(), self.phone.value().to_wire());
        }
        if self.user_status.is_set() {
            obj.insert(
                USER_STATUS.wire.to_string(),
                self.user_status.value().to_wire(),
            );
        }
        obj
    }

    fn has_any_field(&self) -> bool {
        self.id.is_set()
            || self.username.is_set()
            || self.first_name.is_set()
            || self.last_name.is_set()
            || self.email.is_set()
            || self.password.is_set()
            || self.phone.is_set()
            || self.user_status.is_set()
    }

    fn is_valid(&self) -> bool {
        // No required properties.
        true
    }

    fn field_valid(&self, ident: &str) -> bool {
        match ident {
            "id" => self.id.is_valid(),
            "username" => self.username.is_valid(),
            "first_name" => self.first_name.is_valid(),
            "last_name" => self.last_name.is_valid(),
            "email" => self.email.is_valid(),
            "password" => self.password.is_valid(),
            "phone" => self.phone.is_valid(),
            "user_status" => self.user_status.is_valid(),
            _ => false,
        }
    }
}

record_wire!(User);

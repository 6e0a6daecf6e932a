use super::{Category, Tag};
use crate::record::{record_wire, Field, FieldDescriptor, Record, ToWire};
use serde_json::{Map, Value};

const ID: FieldDescriptor = FieldDescriptor::optional("id", "id");
const CATEGORY: FieldDescriptor = FieldDescriptor::optional("category", "category");
const NAME: FieldDescriptor = FieldDescriptor::required("name", "name");
const PHOTO_URLS: FieldDescriptor = FieldDescriptor::required("photo_urls", "photoUrls");
const TAGS: FieldDescriptor = FieldDescriptor::optional("tags", "tags");
const STATUS: FieldDescriptor = FieldDescriptor::optional("status", "status");

/// A pet listed in the store.
///
/// `name` and `photo_urls` are required by the schema; everything else is
/// optional. `status` is enum-like on the wire (`available`/`pending`/
/// `sold`) but carried as a plain string here, with value enforcement left
/// to an external validation layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pet {
    id: Field<i64>,
    category: Field<Category>,
    name: Field<String>,
    photo_urls: Field<Vec<String>>,
    tags: Field<Vec<Tag>>,
    status: Field<String>,
}

impl Pet {
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

    pub fn category(&self) -> &Category {
        self.category.value()
    }

    pub fn set_category(&mut self, category: Category) {
        self.category.set(category);
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category.set(category);
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

    pub fn photo_urls(&self) -> &[String] {
        self.photo_urls.value()
    }

    pub fn set_photo_urls(&mut self, photo_urls: Vec<String>) {
        self.photo_urls.set(photo_urls);
    }

    pub fn with_photo_urls(mut self, photo_urls: Vec<String>) -> Self {
        self.photo_urls.set(photo_urls);
        self
    }

    pub fn tags(&self) -> &[Tag] {
        self.tags.value()
    }

    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags.set(tags);
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags.set(tags);
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
}

impl Record for Pet {
    const DESCRIPTORS: &'static [FieldDescriptor] =
        &[ID, CATEGORY, NAME, PHOTO_URLS, TAGS, STATUS];

    fn read_object(&mut self, obj: &Map<String, Value>) {
        self.id.read_from(obj, &ID);
        self.category.read_from(obj, &CATEGORY);
        self.name.read_from(obj, &NAME);
        self.photo_urls.read_from(obj, &PHOTO_URLS);
        self.tags.read_from(obj, &TAGS);
        self.status.read_from(obj, &STATUS);
    }

    fn to_object(&self) -> Map<String, Value> {
        let mut obj = Map::new();
        if self.id.is_set() {
            obj.insert(ID.wire.to_string(), self.id.value().to_wire());
        }
        if self.category.value().has_any_field() {
            obj.insert(CATEGORY.wire.to_string(), self.category.value().to_wire());
        }
        if self.name.is_set() {
            obj.insert(NAME.wire.to_string(), self.name.value().to_wire());
        }
        // Sequences are gated on non-emptiness, not on the set flag; an
        // explicitly set empty list is dropped from the output.
        if !self.photo_urls.value().is_empty() {
            obj.insert(
                PHOTO_URLS.wire.to_string(),
                self.photo_urls.value().to_wire(),
            );
        }
        if !self.tags.value().is_empty() {
            obj.insert(TAGS.wire.to_string(), self.tags.value().to_wire());
        }
        if self.status.is_set() {
            obj.insert(STATUS.wire.to_string(), self.status.value().to_wire());
        }
        obj
    }

    fn has_any_field(&self) -> bool {
        self.id.is_set()
            || self.category.value().has_any_field()
            || self.name.is_set()
            || !self.photo_urls.value().is_empty()
            || !self.tags.value().is_empty()
            || self.status.is_set()
    }

    fn is_valid(&self) -> bool {
        // Only required properties gate whole-record validity.
        self.name.is_valid() && self.photo_urls.is_valid()
    }

    fn field_valid(&self, ident: &str) -> bool {
        match ident {
            "id" => self.id.is_valid(),
            "category" => self.category.is_valid(),
            "name" => self.name.is_valid(),
            "photo_urls" => self.photo_urls.is_valid(),
            "tags" => self.tags.is_valid(),
            "status" => self.status.is_valid(),
            _ => false,
        }
    }
}

record_wire!(Pet);

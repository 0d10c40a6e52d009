//! Declarative request-body schema descriptors.
//!
//! A descriptor is a constant value listing the properties of a JSON object body, their
//! primitive type and a human-readable label, plus the property names marked required. It is
//! never checked against real request bodies; it only feeds the OpenAPI document.

use utoipa::openapi::schema::{Object, ObjectBuilder, Schema, SchemaType};
use utoipa::openapi::RefOr;

pub const RIDDLE_ANSWER: &str = "riddle_answer";
pub const RIDDLE_TYPE: &str = "riddle_type";
pub const RIDDLE_DESCRIPTION: &str = "riddle_description";

/// Request body accepted by the riddle endpoint.
pub const RIDDLE_REQUEST_BODY: ObjectSchemaDescriptor = ObjectSchemaDescriptor {
    properties: &[
        PropertyDescriptor {
            name: RIDDLE_ANSWER,
            property_type: PropertyType::String,
            description: "谜语答案",
        },
        PropertyDescriptor {
            name: RIDDLE_TYPE,
            property_type: PropertyType::String,
            description: "谜语类型",
        },
        PropertyDescriptor {
            name: RIDDLE_DESCRIPTION,
            property_type: PropertyType::String,
            description: "谜语描述",
        },
    ],
    required: &[RIDDLE_ANSWER, RIDDLE_TYPE, RIDDLE_DESCRIPTION],
};

/// Primitive type of a leaf property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyType {
    String,
}

impl PropertyType {
    fn to_openapi(self) -> SchemaType {
        match self {
            PropertyType::String => SchemaType::String,
        }
    }
}

/// One named property of an object body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub property_type: PropertyType,
    pub description: &'static str,
}

/// Shape of a JSON object request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectSchemaDescriptor {
    pub properties: &'static [PropertyDescriptor],
    pub required: &'static [&'static str],
}

impl ObjectSchemaDescriptor {
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(&name)
    }

    pub fn property_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.iter().map(|p| p.name)
    }

    /// Render the descriptor as an OpenAPI object schema.
    pub fn to_openapi(&self) -> Object {
        let mut builder = ObjectBuilder::new().schema_type(SchemaType::Object);

        for property in self.properties {
            let leaf = ObjectBuilder::new()
                .schema_type(property.property_type.to_openapi())
                .description(Some(property.description))
                .build();
            builder = builder.property(property.name, RefOr::T(Schema::Object(leaf)));
        }

        for name in self.required {
            builder = builder.required(*name);
        }

        builder.build()
    }
}

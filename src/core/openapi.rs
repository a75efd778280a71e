//! OpenAPI document for the items API
//!
//! The document is assembled from [`ROUTES`], a declarative table of every
//! documented operation, so the served schema and the router stay easy to
//! compare side by side.

use openapiv3::{
    ArrayType, Components, Info, IntegerType, MediaType, NumberType, ObjectType, OpenAPI,
    Operation, Parameter, ParameterData, ParameterSchemaOrContent, PathItem, PathStyle,
    QueryStyle, ReferenceOr, RequestBody, Response, Schema, SchemaData, SchemaKind, StatusCode,
    StringType, Type,
};

use crate::core::model_name::ModelName;

pub const OPENAPI_VERSION: &str = "3.0.3";
pub const API_TITLE: &str = "Items API";
const JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Put,
    Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
    Model,
}

#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub location: ParamLocation,
    pub kind: ParamKind,
    pub required: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct RouteSpec {
    pub verb: Verb,
    pub path: &'static str,
    pub operation_id: &'static str,
    pub summary: &'static str,
    pub params: &'static [ParamSpec],
    pub item_body: bool,
}

const fn path(name: &'static str, kind: ParamKind) -> ParamSpec {
    ParamSpec {
        name,
        location: ParamLocation::Path,
        kind,
        required: true,
    }
}

const fn query(name: &'static str, kind: ParamKind) -> ParamSpec {
    ParamSpec {
        name,
        location: ParamLocation::Query,
        kind,
        required: false,
    }
}

const ITEM_QUERY: [ParamSpec; 2] = [
    query("q", ParamKind::String),
    query("short", ParamKind::Boolean),
];

pub const ROUTES: &[RouteSpec] = &[
    RouteSpec {
        verb: Verb::Get,
        path: "/",
        operation_id: "root",
        summary: "Root",
        params: &[],
        item_body: false,
    },
    RouteSpec {
        verb: Verb::Get,
        path: "/items/{item_id}",
        operation_id: "read_item",
        summary: "Read Item",
        params: &[path("item_id", ParamKind::String), ITEM_QUERY[0], ITEM_QUERY[1]],
        item_body: false,
    },
    RouteSpec {
        verb: Verb::Put,
        path: "/items/{item_id}",
        operation_id: "update_item",
        summary: "Update Item",
        params: &[path("item_id", ParamKind::Integer)],
        item_body: true,
    },
    RouteSpec {
        verb: Verb::Post,
        path: "/items",
        operation_id: "create_item",
        summary: "Create Item",
        params: &[],
        item_body: true,
    },
    RouteSpec {
        verb: Verb::Get,
        path: "/users/me",
        operation_id: "read_user_me",
        summary: "Read User Me",
        params: &[],
        item_body: false,
    },
    RouteSpec {
        verb: Verb::Get,
        path: "/users/{user_id}",
        operation_id: "read_user",
        summary: "Read User",
        params: &[path("user_id", ParamKind::String)],
        item_body: false,
    },
    RouteSpec {
        verb: Verb::Get,
        path: "/models/{model_name}",
        operation_id: "get_model",
        summary: "Get Model",
        params: &[path("model_name", ParamKind::Model)],
        item_body: false,
    },
    RouteSpec {
        verb: Verb::Get,
        path: "/files/{file_path}",
        operation_id: "read_file",
        summary: "Read File",
        params: &[path("file_path", ParamKind::String)],
        item_body: false,
    },
    RouteSpec {
        verb: Verb::Get,
        path: "/users/{user_id}/items/{item_id}",
        operation_id: "read_user_item",
        summary: "Read User Item",
        params: &[
            path("user_id", ParamKind::Integer),
            path("item_id", ParamKind::String),
            ITEM_QUERY[0],
            ITEM_QUERY[1],
        ],
        item_body: false,
    },
];

fn schema(kind: SchemaKind) -> Schema {
    Schema {
        schema_data: SchemaData::default(),
        schema_kind: kind,
    }
}

fn titled(title: &str, kind: SchemaKind) -> Schema {
    Schema {
        schema_data: SchemaData {
            title: Some(title.to_string()),
            ..Default::default()
        },
        schema_kind: kind,
    }
}

fn string_schema() -> SchemaKind {
    SchemaKind::Type(Type::String(StringType::default()))
}

fn schema_ref(name: &str) -> ReferenceOr<Schema> {
    ReferenceOr::Reference {
        reference: format!("#/components/schemas/{name}"),
    }
}

fn param_schema(kind: ParamKind) -> Schema {
    match kind {
        ParamKind::String => schema(string_schema()),
        ParamKind::Integer => schema(SchemaKind::Type(Type::Integer(IntegerType::default()))),
        ParamKind::Boolean => Schema {
            schema_data: SchemaData {
                default: Some(serde_json::Value::Bool(false)),
                ..Default::default()
            },
            schema_kind: SchemaKind::Type(Type::Boolean(Default::default())),
        },
        ParamKind::Model => schema(SchemaKind::Type(Type::String(StringType {
            enumeration: ModelName::ALL
                .iter()
                .map(|model| Some(model.as_str().to_string()))
                .collect(),
            ..Default::default()
        }))),
    }
}

fn parameter(param: &ParamSpec) -> Parameter {
    let parameter_data = ParameterData {
        name: param.name.to_string(),
        description: None,
        required: param.required,
        deprecated: None,
        format: ParameterSchemaOrContent::Schema(ReferenceOr::Item(param_schema(param.kind))),
        example: None,
        examples: Default::default(),
        explode: None,
        extensions: Default::default(),
    };

    match param.location {
        ParamLocation::Path => Parameter::Path {
            parameter_data,
            style: PathStyle::Simple,
        },
        ParamLocation::Query => Parameter::Query {
            parameter_data,
            allow_reserved: false,
            style: QueryStyle::Form,
            allow_empty_value: None,
        },
    }
}

fn json_response(description: &str, body_schema: Option<ReferenceOr<Schema>>) -> Response {
    let mut response = Response {
        description: description.to_string(),
        ..Default::default()
    };
    response.content.insert(
        JSON.to_string(),
        MediaType {
            schema: body_schema,
            ..Default::default()
        },
    );
    response
}

fn operation(route: &RouteSpec) -> Operation {
    let mut operation = Operation {
        summary: Some(route.summary.to_string()),
        operation_id: Some(route.operation_id.to_string()),
        parameters: route
            .params
            .iter()
            .map(|param| ReferenceOr::Item(parameter(param)))
            .collect(),
        ..Default::default()
    };

    if route.item_body {
        let mut body = RequestBody {
            required: true,
            ..Default::default()
        };
        body.content.insert(
            JSON.to_string(),
            MediaType {
                schema: Some(schema_ref("Item")),
                ..Default::default()
            },
        );
        operation.request_body = Some(ReferenceOr::Item(body));
    }

    operation.responses.responses.insert(
        StatusCode::Code(200),
        ReferenceOr::Item(json_response("Successful Response", None)),
    );
    if !route.params.is_empty() || route.item_body {
        operation.responses.responses.insert(
            StatusCode::Code(422),
            ReferenceOr::Item(json_response(
                "Validation Error",
                Some(schema_ref("HTTPValidationError")),
            )),
        );
    }

    operation
}

fn item_schema() -> Schema {
    let mut object = ObjectType {
        required: vec!["name".to_string(), "price".to_string()],
        ..Default::default()
    };
    let nullable = |title: &str, kind: SchemaKind| Schema {
        schema_data: SchemaData {
            title: Some(title.to_string()),
            nullable: true,
            ..Default::default()
        },
        schema_kind: kind,
    };
    let number = || SchemaKind::Type(Type::Number(NumberType::default()));

    object
        .properties
        .insert("name".to_string(), ReferenceOr::Item(Box::new(titled("Name", string_schema()))));
    object.properties.insert(
        "description".to_string(),
        ReferenceOr::Item(Box::new(nullable("Description", string_schema()))),
    );
    object
        .properties
        .insert("price".to_string(), ReferenceOr::Item(Box::new(titled("Price", number()))));
    object.properties.insert(
        "tax".to_string(),
        ReferenceOr::Item(Box::new(nullable("Tax", number()))),
    );

    titled("Item", SchemaKind::Type(Type::Object(object)))
}

fn validation_error_schema() -> Schema {
    let mut entry = ObjectType {
        required: vec!["loc".to_string(), "msg".to_string(), "type".to_string()],
        ..Default::default()
    };
    entry.properties.insert(
        "loc".to_string(),
        ReferenceOr::Item(Box::new(titled(
            "Location",
            SchemaKind::Type(Type::Array(ArrayType {
                items: Some(ReferenceOr::Item(Box::new(schema(string_schema())))),
                min_items: None,
                max_items: None,
                unique_items: false,
            })),
        ))),
    );
    entry
        .properties
        .insert("msg".to_string(), ReferenceOr::Item(Box::new(titled("Message", string_schema()))));
    entry.properties.insert(
        "type".to_string(),
        ReferenceOr::Item(Box::new(titled("Error Type", string_schema()))),
    );

    let mut wrapper = ObjectType::default();
    wrapper.properties.insert(
        "detail".to_string(),
        ReferenceOr::Item(Box::new(titled(
            "Detail",
            SchemaKind::Type(Type::Array(ArrayType {
                items: Some(ReferenceOr::Item(Box::new(titled(
                    "ValidationError",
                    SchemaKind::Type(Type::Object(entry)),
                )))),
                min_items: None,
                max_items: None,
                unique_items: false,
            })),
        ))),
    );

    titled("HTTPValidationError", SchemaKind::Type(Type::Object(wrapper)))
}

/// Build the OpenAPI document describing every route in [`ROUTES`].
pub fn api_document() -> OpenAPI {
    let mut document = OpenAPI {
        openapi: OPENAPI_VERSION.to_string(),
        info: Info {
            title: API_TITLE.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        },
        ..Default::default()
    };

    for route in ROUTES {
        let entry = document
            .paths
            .paths
            .entry(route.path.to_string())
            .or_insert_with(|| ReferenceOr::Item(PathItem::default()));
        let ReferenceOr::Item(path_item) = entry else {
            continue;
        };

        let slot = match route.verb {
            Verb::Get => &mut path_item.get,
            Verb::Put => &mut path_item.put,
            Verb::Post => &mut path_item.post,
        };
        *slot = Some(operation(route));
    }

    let mut components = Components::default();
    components
        .schemas
        .insert("Item".to_string(), ReferenceOr::Item(item_schema()));
    components.schemas.insert(
        "HTTPValidationError".to_string(),
        ReferenceOr::Item(validation_error_schema()),
    );
    document.components = Some(components);

    document
}

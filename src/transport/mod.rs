//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod messages;

pub use messages::{
    decode_errors_json_response, decode_message_json_response, encode_create_message_form,
};

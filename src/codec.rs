//! JSON wire format for types.
//!
//! Types are written in the adjacently tagged form used by compiled module
//! metadata: `{"tag": "TypeApp", "contents": [..]}`. See [`TyKind`] for the
//! variant names.
//!
//! Serialization recurses once per level of nesting, so both directions
//! enforce [`CodecOptions::max_depth`]. Decoding additionally bounds the raw
//! JSON nesting before parsing, so hostile input cannot exhaust the stack.
//!
//! [`TyKind`]: corvid_types::TyKind

use core::convert::Infallible;

use corvid_types::Ty;
use corvid_types::traversal::{Fold, FoldStep, drive_fold};
use serde::Deserialize;
use thiserror::Error;

/// Default maximum type nesting accepted by the codec.
///
/// A record type nests one level per field, so this also bounds the width
/// of records that round-trip with the default options.
const DEFAULT_MAX_DEPTH: usize = 2048;

/// Upper bound on JSON arrays and objects opened per level of type nesting.
///
/// A constraint argument is the worst case: the `Constrained` object, its
/// `contents` array, the constraint list, the constraint object and its
/// `args` array.
const JSON_LEVELS_PER_TYPE: usize = 5;

#[derive(Error, Debug)]
pub enum CodecError {
    /// The type is nested deeper than the configured limit. When raw input is
    /// rejected before parsing, `depth` is `max + 1`.
    #[error("type nesting depth {depth} exceeds maximum of {max} levels")]
    DepthExceeded { depth: usize, max: usize },

    #[error("malformed type encoding: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options for encoding and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Deepest type accepted, counting a leaf as depth 1.
    pub max_depth: usize,
    /// Whether to indent the encoded output.
    pub pretty: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions::default()
    }
}

impl CodecOptions {
    const fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            pretty: false,
        }
    }

    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    pub const fn with_pretty(self, pretty: bool) -> Self {
        Self { pretty, ..self }
    }
}

/// Encodes a type as compact JSON with the default options.
pub fn encode(ty: &Ty) -> Result<String, CodecError> {
    encode_with_options(ty, &CodecOptions::default())
}

/// Encodes a type as JSON.
///
/// Fails with [`CodecError::DepthExceeded`] before writing anything if `ty`
/// is nested deeper than `options.max_depth`.
pub fn encode_with_options(ty: &Ty, options: &CodecOptions) -> Result<String, CodecError> {
    check_depth(ty, options)?;
    let json = if options.pretty {
        serde_json::to_string_pretty(ty)?
    } else {
        serde_json::to_string(ty)?
    };
    Ok(json)
}

/// Decodes a type from JSON with the default options.
pub fn decode(input: &str) -> Result<Ty, CodecError> {
    decode_with_options(input, &CodecOptions::default())
}

/// Decodes a type from JSON.
///
/// Trailing non-whitespace after the value is an error.
pub fn decode_with_options(input: &str, options: &CodecOptions) -> Result<Ty, CodecError> {
    let limit = options.max_depth.saturating_mul(JSON_LEVELS_PER_TYPE);
    if json_nesting_exceeds(input, limit) {
        tracing::debug!(limit, "rejecting type encoding before parsing");
        return Err(CodecError::DepthExceeded {
            depth: options.max_depth.saturating_add(1),
            max: options.max_depth,
        });
    }

    // Nesting is already bounded above; serde_json's own limit is far lower
    // than the type depths we accept.
    let mut de = serde_json::Deserializer::from_str(input);
    de.disable_recursion_limit();
    let ty = Ty::deserialize(&mut de)?;
    de.end()?;

    check_depth(&ty, options)?;
    Ok(ty)
}

/// Converts a type to a JSON value, for embedding in a larger document.
pub fn to_value(ty: &Ty) -> Result<serde_json::Value, CodecError> {
    check_depth(ty, &CodecOptions::default())?;
    Ok(serde_json::to_value(ty)?)
}

/// Reads a type back from a JSON value produced by [`to_value`].
pub fn from_value(value: serde_json::Value) -> Result<Ty, CodecError> {
    let options = CodecOptions::default();
    let limit = options.max_depth.saturating_mul(JSON_LEVELS_PER_TYPE);
    if value_nesting_exceeds(&value, limit) {
        tracing::debug!(limit, "rejecting type value before conversion");
        return Err(CodecError::DepthExceeded {
            depth: options.max_depth.saturating_add(1),
            max: options.max_depth,
        });
    }
    let ty: Ty = serde_json::from_value(value)?;
    check_depth(&ty, &options)?;
    Ok(ty)
}

/// Number of nodes on the longest root-to-leaf path of `ty`.
///
/// Constraint arguments count as children of their `Constrained` node.
pub fn type_depth(ty: &Ty) -> usize {
    match drive_fold(ty, Depth) {
        Ok(depth) => depth,
        Err(never) => match never {},
    }
}

struct Depth;

impl Fold for Depth {
    type Output = usize;
    type Error = Infallible;

    fn visit(&mut self, _ty: &Ty) -> Result<FoldStep<usize>, Infallible> {
        Ok(FoldStep::Recurse)
    }

    fn combine(
        &mut self,
        _ty: &Ty,
        children: impl ExactSizeIterator<Item = usize> + DoubleEndedIterator,
    ) -> Result<usize, Infallible> {
        Ok(1 + children.max().unwrap_or(0))
    }
}

fn check_depth(ty: &Ty, options: &CodecOptions) -> Result<(), CodecError> {
    let depth = type_depth(ty);
    if depth > options.max_depth {
        tracing::debug!(depth, max = options.max_depth, "type too deep for codec");
        return Err(CodecError::DepthExceeded {
            depth,
            max: options.max_depth,
        });
    }
    Ok(())
}

/// True once arrays and objects in `input` nest deeper than `limit`.
///
/// Brackets inside strings are ignored. Malformed input is left for the
/// parser to report.
fn json_nesting_exceeds(input: &str, limit: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for byte in input.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}

fn value_nesting_exceeds(value: &serde_json::Value, limit: usize) -> bool {
    use serde_json::Value;

    let mut stack = vec![(value, 0usize)];
    while let Some((value, depth)) = stack.pop() {
        match value {
            Value::Array(items) => {
                if depth + 1 > limit {
                    return true;
                }
                stack.extend(items.iter().map(|item| (item, depth + 1)));
            }
            Value::Object(fields) => {
                if depth + 1 > limit {
                    return true;
                }
                stack.extend(fields.values().map(|item| (item, depth + 1)));
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }
    false
}

use crate::artifact::{AbiEntry, AbiParameter};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureKind {
    Constructor,
    Function,
    Event,
}

impl SignatureKind {
    pub fn from_abi_kind(kind: &str) -> Option<Self> {
        match kind {
            "constructor" => Some(Self::Constructor),
            "function" => Some(Self::Function),
            "event" => Some(Self::Event),
            // fallback, receive, error entries carry no decorators
            _ => None,
        }
    }
}

/// Structural identity of an ABI element: its kind, its name (empty for
/// constructors) and the ordered list of canonical parameter types. Decorator
/// matching goes through this type instead of raw string comparison, so
/// `f( uint256 )` and `f(uint256)` land on the same signature while `f()`
/// and `f(uint256)` stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    kind: SignatureKind,
    name: String,
    parameter_types: Vec<String>,
}

impl Signature {
    pub fn kind(&self) -> SignatureKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameter_types(&self) -> &[String] {
        &self.parameter_types
    }

    /// Builds the signature of an ABI entry from its declared inputs.
    /// Returns `None` for entry kinds that cannot carry decorators.
    pub fn from_abi(entry: &AbiEntry) -> Option<Self> {
        let kind = SignatureKind::from_abi_kind(&entry.kind)?;
        let name = match kind {
            SignatureKind::Constructor => String::new(),
            _ => entry.name.clone()?,
        };
        Some(Self {
            kind,
            name,
            parameter_types: entry.inputs.iter().map(canonical_type).collect(),
        })
    }

    /// Parses a decorator signature string, e.g. `transfer(address,uint256)`
    /// or `constructor(string)`. Whitespace around types is ignored. Returns
    /// `None` on malformed input; malformed signatures simply never match.
    pub fn parse(kind: SignatureKind, signature: &str) -> Option<Self> {
        let signature = signature.trim();
        let open = signature.find('(')?;
        let name = signature[..open].trim();
        match kind {
            SignatureKind::Constructor if name != "constructor" => return None,
            SignatureKind::Function | SignatureKind::Event if name.is_empty() => return None,
            _ => {}
        }
        if !signature.ends_with(')') {
            return None;
        }
        let inner = &signature[open + 1..signature.len() - 1];
        let parameter_types = split_parameter_types(inner)?;
        Some(Self {
            kind,
            name: match kind {
                SignatureKind::Constructor => String::new(),
                _ => name.to_string(),
            },
            parameter_types,
        })
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind {
            SignatureKind::Constructor => "constructor",
            _ => &self.name,
        };
        write!(f, "{}({})", name, self.parameter_types.join(","))
    }
}

/// Canonical type of an ABI parameter: tuples expand to their component types
/// with any array suffix preserved, e.g. `tuple[2]` with `(address,uint256)`
/// components becomes `tuple(address,uint256)[2]`.
pub(crate) fn canonical_type(parameter: &AbiParameter) -> String {
    match parameter.solidity_type.strip_prefix("tuple") {
        Some(array_suffix) => {
            let components = parameter
                .components
                .iter()
                .map(canonical_type)
                .collect::<Vec<_>>()
                .join(",");
            format!("tuple({components}){array_suffix}")
        }
        None => parameter.solidity_type.clone(),
    }
}

/// Splits a parameter list at top-level commas, respecting nested
/// parentheses and brackets of tuple types. Returns `None` when the list is
/// unbalanced or contains an empty component.
fn split_parameter_types(inner: &str) -> Option<Vec<String>> {
    if inner.trim().is_empty() {
        return Some(vec![]);
    }
    let mut types = vec![];
    let mut depth = 0usize;
    let mut current = String::new();
    for c in inner.chars() {
        match c {
            '(' | '[' => {
                depth += 1;
                current.push(c);
            }
            ')' | ']' => {
                depth = depth.checked_sub(1)?;
                current.push(c);
            }
            ',' if depth == 0 => {
                types.push(std::mem::take(&mut current));
            }
            c if c.is_whitespace() => {}
            c => current.push(c),
        }
    }
    if depth != 0 {
        return None;
    }
    types.push(current);
    if types.iter().any(String::is_empty) {
        return None;
    }
    Some(types)
}

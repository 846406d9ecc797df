//! Core data model: the structured description of an extracted class.
//!
//! A [`ClassDescriptor`] is produced once per extraction call and handed to
//! downstream generators (registration glue, TypeScript stubs). It owns its
//! member descriptors and is never mutated after extraction.

use serde::{Deserialize, Serialize};

/// Name used for enums declared without an identifier.
pub const ANONYMOUS_ENUM: &str = "<anonymous>";

/// A `property<T>` member: observable state exposed to the bridge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    /// Canonical signature of the wrapped type.
    pub type_name: String,
}

/// An `event<Args...>` member: a notification channel with zero or more
/// argument types.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDescriptor {
    pub name: String,
    pub arg_types: Vec<String>,
}

/// A `const`/`constexpr` data member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantDescriptor {
    pub name: String,
    pub type_name: String,
    pub is_static: bool,
}

/// An enum declared inside the class body. Enumerator initializer values
/// are not captured, only the names in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    pub name: String,
    pub values: Vec<String>,
    /// `enum class` / `enum struct` vs. a plain unscoped `enum`.
    pub is_scoped: bool,
}

/// One method or constructor parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub type_name: String,
    pub name: String,
}

impl Parameter {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

/// A method or constructor. Constructors carry an empty return type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    pub is_async: bool,
}

impl MethodDescriptor {
    /// A parameterless constructor for the named class, used when a class
    /// declares no constructor of its own.
    pub fn default_constructor(class_name: &str) -> Self {
        Self {
            name: class_name.to_string(),
            return_type: String::new(),
            parameters: Vec::new(),
            is_async: false,
        }
    }
}

/// Everything the extractor learned about one class.
///
/// The namespace path runs outer-to-inner and belongs to the class, not to
/// its members. The constructors collection is never empty: a default
/// constructor is synthesized when the class declares none.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,
    pub namespace: Vec<String>,
    pub properties: Vec<PropertyDescriptor>,
    pub events: Vec<EventDescriptor>,
    pub constants: Vec<ConstantDescriptor>,
    pub enums: Vec<EnumDescriptor>,
    pub constructors: Vec<MethodDescriptor>,
    pub sync_methods: Vec<MethodDescriptor>,
    pub async_methods: Vec<MethodDescriptor>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>, namespace: Vec<String>) -> Self {
        Self {
            name: name.into(),
            namespace,
            properties: Vec::new(),
            events: Vec::new(),
            constants: Vec::new(),
            enums: Vec::new(),
            constructors: Vec::new(),
            sync_methods: Vec::new(),
            async_methods: Vec::new(),
        }
    }

    /// Total number of extracted members across all seven collections.
    pub fn member_count(&self) -> usize {
        self.properties.len()
            + self.events.len()
            + self.constants.len()
            + self.enums.len()
            + self.constructors.len()
            + self.sync_methods.len()
            + self.async_methods.len()
    }

    /// Fully qualified name, `ns::inner::Class` style.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.namespace.join("::"), self.name)
        }
    }
}

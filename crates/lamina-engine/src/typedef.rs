//! TypeDef — immutable behavior layers and extension chains
//!
//! A type definition describes one layer: its member table plus a reference
//! to its parent, which is either another type definition or a host base
//! class. Following parent links from a leaf back to the base yields the
//! extension chain; instantiation walks that chain root-first.
//!
//! Definitions are immutable once constructed and shared via `Arc`: the same
//! definition may parent any number of sibling extensions and be instantiated
//! directly, independent of how many further extensions exist. A later
//! sibling never affects an earlier one — parents are shared structurally,
//! never mutated.

use std::sync::Arc;

use lamina_sdk::{BaseClass, Value};

use crate::instance::Instance;
use crate::table::MethodTable;

/// Method name injected by [`TypeDef::extend_named`] when absent.
const CLASS_NAME_METHOD: &str = "getClassName";

/// Parent of a type definition: another definition, or a host base class.
#[derive(Clone)]
pub enum Parent {
    /// The opaque host base type at the root of the chain
    Base(Arc<dyn BaseClass>),
    /// An existing type definition to extend
    Type(Arc<TypeDef>),
}

impl Parent {
    /// Parent referencing a host base class
    pub fn base(class: Arc<dyn BaseClass>) -> Self {
        Self::Base(class)
    }

    /// Parent referencing an existing type definition
    pub fn type_def(def: Arc<TypeDef>) -> Self {
        Self::Type(def)
    }
}

impl From<Arc<dyn BaseClass>> for Parent {
    fn from(class: Arc<dyn BaseClass>) -> Self {
        Self::Base(class)
    }
}

impl From<Arc<TypeDef>> for Parent {
    fn from(def: Arc<TypeDef>) -> Self {
        Self::Type(def)
    }
}

impl std::fmt::Debug for Parent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(class) => write!(f, "Parent::Base({})", class.name()),
            Self::Type(def) => write!(
                f,
                "Parent::Type({})",
                def.display_name().unwrap_or("<anonymous>")
            ),
        }
    }
}

/// One immutable behavior layer plus its parent reference.
pub struct TypeDef {
    members: MethodTable,
    parent: Parent,
    display_name: Option<String>,
}

impl TypeDef {
    /// Build a new type definition from a parent and a member table.
    ///
    /// The table may be empty (a pass-through layer), may redefine ancestor
    /// method names (overrides), and may introduce entirely new names. Moving
    /// the table in is what keeps the definition immutable: no handle remains
    /// through which the members could change afterwards.
    pub fn extend(parent: impl Into<Parent>, table: MethodTable) -> Arc<Self> {
        Arc::new(Self {
            members: table,
            parent: parent.into(),
            display_name: None,
        })
    }

    /// Build a named type definition.
    ///
    /// The name is a diagnostic tag with no effect on resolution. Unless the
    /// table already defines one, a `getClassName` method returning the name
    /// is injected, matching the script bootstrap's named-extend form.
    pub fn extend_named(parent: impl Into<Parent>, mut table: MethodTable, name: &str) -> Arc<Self> {
        if !table.has_method(CLASS_NAME_METHOD) {
            let class_name = name.to_string();
            table = table.method(CLASS_NAME_METHOD, move |_scope, _args| {
                Ok(Value::str(class_name.clone()))
            });
        }
        Arc::new(Self {
            members: table,
            parent: parent.into(),
            display_name: Some(name.to_string()),
        })
    }

    /// The diagnostic name attached at extend time, if any
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// This definition's parent reference
    pub fn parent(&self) -> &Parent {
        &self.parent
    }

    /// Check whether this layer itself defines `name` (no chain search)
    pub fn defines(&self, name: &str) -> bool {
        self.members.has_method(name)
    }

    /// This layer's member table
    pub(crate) fn members(&self) -> &MethodTable {
        &self.members
    }

    /// Collect the extension chain from this leaf back to the base class.
    ///
    /// Returns the layers in root-first order (position 0 is closest to the
    /// base, the last position is `self`) together with the base class the
    /// chain bottoms out on.
    pub fn chain(self: &Arc<Self>) -> (Vec<Arc<TypeDef>>, Arc<dyn BaseClass>) {
        let mut layers: Vec<Arc<TypeDef>> = Vec::new();
        let mut cursor = Arc::clone(self);
        let base = loop {
            layers.push(Arc::clone(&cursor));
            let parent = cursor.parent.clone();
            match parent {
                Parent::Type(def) => cursor = def,
                Parent::Base(class) => break class,
            }
        };
        layers.reverse();
        (layers, base)
    }

    /// Construct a fresh, independent instance of this type definition.
    pub fn instantiate(self: &Arc<Self>) -> Instance {
        Instance::new(self)
    }
}

impl std::fmt::Debug for TypeDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeDef")
            .field("name", &self.display_name)
            .field("members", &self.members)
            .field("parent", &self.parent)
            .finish()
    }
}

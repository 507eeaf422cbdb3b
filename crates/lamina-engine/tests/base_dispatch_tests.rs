//! Base Fall-Through and Failure-Mode Tests
//!
//! Resolution that reaches past every layer: native fall-through, the leaf
//! override injected into an ancestor's body, the explicit direct-to-base
//! call form, and the distinction between "no such method" and "method found
//! but failed".

mod common;

use std::sync::Arc;

use lamina_engine::{
    BaseCallResult, BaseClass, BaseObject, DispatchError, MethodTable, Parent, Runtime, TypeDef,
    Value, ValueError,
};

/// Base type whose objects answer `one` with "One" and nothing else.
struct OneClass;

struct OneObject;

impl BaseClass for OneClass {
    fn name(&self) -> &str {
        "lang.One"
    }
    fn construct(&self) -> Box<dyn BaseObject> {
        Box::new(OneObject)
    }
}

impl BaseObject for OneObject {
    fn invoke(&mut self, name: &str, _args: &[Value]) -> BaseCallResult {
        match name {
            "one" => BaseCallResult::str("One"),
            _ => BaseCallResult::Unhandled,
        }
    }
}

// ===== Fall-through to the base provider =====

#[test]
fn test_fallthrough_to_base_method() {
    // No layer defines `get`; the native counter answers.
    let def = TypeDef::extend(Parent::base(common::counter_class()), MethodTable::new());
    let instance = def.instantiate();
    assert_eq!(instance.call("get", &[]).unwrap(), Value::int(0));
}

#[test]
fn test_leaf_override_reaches_into_ancestor_body() {
    // L3's body calls this.one(). Instantiated as L3 the call falls through
    // to the base default; instantiated as L4 the leaf override wins even
    // though the calling body sits two layers below it.
    let l1 = TypeDef::extend(
        Parent::base(Arc::new(OneClass) as Arc<dyn BaseClass>),
        MethodTable::new().method("get", |_s, _a| Ok(Value::str("A"))),
    );
    let l2 = TypeDef::extend(
        Parent::type_def(Arc::clone(&l1)),
        MethodTable::new().method("get", |scope, _a| {
            let inner = scope.call_super("get", &[])?;
            Ok(Value::str(format!("{} B", inner)))
        }),
    );
    let l3 = TypeDef::extend(
        Parent::type_def(Arc::clone(&l2)),
        MethodTable::new().method("get", |scope, _a| {
            let inner = scope.call_super("get", &[])?;
            let one = scope.call("one", &[])?;
            Ok(Value::str(format!("{} C {}", inner, one)))
        }),
    );
    let l4 = TypeDef::extend(
        Parent::type_def(Arc::clone(&l3)),
        MethodTable::new().method("one", |_s, _a| Ok(Value::str("1"))),
    );

    assert_eq!(
        l3.instantiate().call("get", &[]).unwrap(),
        Value::str("A B C One")
    );
    assert_eq!(
        l4.instantiate().call("get", &[]).unwrap(),
        Value::str("A B C 1")
    );
}

#[test]
fn test_call_base_bypasses_layer_overrides() {
    // The corpus's super$ form: the override folds the counter mod 10, the
    // direct base call sees the raw native value.
    let def = TypeDef::extend(
        Parent::base(common::counter_class()),
        MethodTable::new().method("get", |scope, _a| {
            let raw = scope.call_super("get", &[])?.as_int().unwrap_or(0);
            Ok(Value::int(raw % 10))
        }),
    );

    let instance = def.instantiate();
    instance.call("set", &[Value::int(42)]).unwrap();
    assert_eq!(instance.call("get", &[]).unwrap(), Value::int(2));
    assert_eq!(instance.call_base("get", &[]).unwrap(), Value::int(42));
}

// ===== Failure modes =====

#[test]
fn test_unresolved_method_is_an_error() {
    // Defined nowhere in the chain and not on the base: an explicit error,
    // never a silent null.
    let def = TypeDef::extend_named(
        Parent::base(common::object_class()),
        MethodTable::new(),
        "Container",
    );
    let instance = def.instantiate();

    let err = instance.call("missing", &[]).unwrap_err();
    assert_eq!(
        err,
        DispatchError::UnresolvedMethod {
            type_name: "Container".to_string(),
            method: "missing".to_string(),
        }
    );
}

#[test]
fn test_super_past_the_root_is_unresolved() {
    // super from the root layer resolves directly against the base; a name
    // the base lacks fails the same way.
    let def = TypeDef::extend(
        Parent::base(common::object_class()),
        MethodTable::new().method("get", |scope, _a| scope.call_super("get", &[])),
    );
    assert!(matches!(
        def.instantiate().call("get", &[]),
        Err(DispatchError::UnresolvedMethod { .. })
    ));
}

#[test]
fn test_provider_error_is_not_unresolved() {
    // The counter's `set` exists but rejects non-int input: that failure
    // must surface as a provider error, not as a missing method.
    let def = TypeDef::extend(Parent::base(common::counter_class()), MethodTable::new());
    let instance = def.instantiate();

    let err = instance.call("set", &[Value::str("nope")]).unwrap_err();
    assert!(matches!(err, DispatchError::Provider(_)));

    let err = instance.call("nonsense", &[]).unwrap_err();
    assert!(matches!(err, DispatchError::UnresolvedMethod { .. }));
}

#[test]
fn test_layer_fault_is_not_unresolved() {
    let def = TypeDef::extend(
        Parent::base(common::object_class()),
        MethodTable::new().method("explode", |_s, _a| {
            Err(DispatchError::Fault("boom".to_string()))
        }),
    );
    let err = def.instantiate().call("explode", &[]).unwrap_err();
    assert_eq!(err, DispatchError::Fault("boom".to_string()));
}

#[test]
fn test_argument_error_propagates_from_layer_body() {
    let def = TypeDef::extend(
        Parent::base(common::object_class()),
        MethodTable::new().method("set", |scope, args| {
            let v = lamina_engine::Args::new(args).int(0)?;
            scope.set("val", Value::int(v));
            Ok(Value::null())
        }),
    );
    let err = def.instantiate().call("set", &[Value::str("x")]).unwrap_err();
    assert_eq!(
        err,
        DispatchError::Value(ValueError::TypeMismatch {
            expected: "int",
            got: "string",
        })
    );
}

// ===== Runtime name resolution =====

#[test]
fn test_invalid_parent_through_runtime() {
    let rt = Runtime::new();
    rt.register_base(common::object_class());

    let err = rt.extend("lang.Missing", MethodTable::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid parent `lang.Missing`: not a registered base class or named type definition"
    );

    // The registered base resolves fine.
    assert!(rt.extend("lang.Object", MethodTable::new()).is_ok());
}

//! Model builders for tests.

use apidoc::{BuildInputs, BuildOptions, ItemType, Member, Model, Namespace, Store, TypeDef};

/// A class named `name` in namespace `N`.
pub fn class(name: &str) -> TypeDef {
    TypeDef::new(name, format!("N.{name}"), ItemType::Class)
}

pub fn interface(name: &str) -> TypeDef {
    TypeDef::new(name, format!("N.{name}"), ItemType::Interface)
}

pub fn method(name: &str) -> Member {
    Member::new(name, ItemType::Method)
}

/// A model with one namespace `N` holding the given types.
pub fn model_with(types: Vec<TypeDef>) -> Model {
    let mut model = Model::new();
    let ns = model.add_namespace(Namespace::new("N"));
    for type_def in types {
        model.add_type(ns, type_def);
    }
    model
}

/// Build a store over `model` with no external inputs.
pub fn build(model: Model) -> Store {
    build_with(model, BuildInputs::new())
}

pub fn build_with(model: Model, inputs: BuildInputs) -> Store {
    build_with_options(model, inputs, BuildOptions::new())
}

pub fn build_with_options(model: Model, inputs: BuildInputs, options: BuildOptions) -> Store {
    let mut store = Store::new(model, inputs).with_options(options);
    store.build();
    store
}

/// `Root <- Middle <- Leaf`, with overridden and hidden members along the way.
///
/// `Root` derives from `System.Object`, which is not documented.
pub fn hierarchy() -> Model {
    let mut model = Model::new();
    let ns = model.add_namespace(Namespace::new("N"));

    let root = model.add_type(ns, class("Root").with_base_type("System.Object"));
    model.add_member(root, method("Describe"));
    model.add_member(root, method("Render"));
    model.add_member(root, method("Finalize"));
    model.add_member(root, Member::new(".ctor", ItemType::Constructor));
    model.add_member(root, method("Create").with_modifiers(&["public", "static"]));

    let middle = model.add_type(ns, class("Middle").with_base_type("N.Root"));
    model.add_member(middle, method("Render"));
    model.add_member(middle, method("Measure"));

    let leaf = model.add_type(ns, class("Leaf").with_base_type("N.Middle"));
    model.add_member(leaf, method("Measure"));
    model.add_member(leaf, method("Measure").with_param("scale", "System.Double"));
    model
}

/// `System.Collections.Generic.Dictionary<TKey,TValue>` with overloaded `Add`
/// and `TryAdd` members, plus a struct with a conversion operator.
pub fn collections() -> Model {
    let mut model = Model::new();
    let ns = model.add_namespace(Namespace::new("System.Collections.Generic"));
    let dictionary = model.add_type(
        ns,
        TypeDef::new(
            "Dictionary<TKey,TValue>",
            "System.Collections.Generic.Dictionary<TKey,TValue>",
            ItemType::Class,
        )
        .with_type_parameters(&["TKey", "TValue"])
        .with_doc_id("T:System.Collections.Generic.Dictionary`2"),
    );
    model.add_member(
        dictionary,
        method("Add")
            .with_doc_id("M:System.Collections.Generic.Dictionary`2.Add(`0,`1)")
            .with_param("key", "TKey")
            .with_param("value", "TValue"),
    );
    model.add_member(
        dictionary,
        method("Add")
            .with_param("pair", "System.Collections.Generic.KeyValuePair<TKey,TValue>"),
    );
    model.add_member(
        dictionary,
        method("TryAdd<TState>")
            .with_type_parameters(&["TState"])
            .with_param("state", "TState"),
    );

    let conversions = model.add_namespace(Namespace::new("Conversions"));
    let my_struct = model.add_type(
        conversions,
        TypeDef::new("MyStruct", "Conversions.MyStruct", ItemType::Struct),
    );
    model.add_member(
        my_struct,
        Member::new("op_Explicit", ItemType::Operator)
            .with_param("s", "MyStruct")
            .with_return("System.Int32"),
    );
    model
}

//! Derive macros for the `tagwire` wire format: `#[derive(Record)]`,
//! `#[derive(Table)]`, and `#[derive(Variant)]`.

extern crate proc_macro;

mod attribute;
mod record;
mod table;
mod variant;

synstructure::decl_derive!(
    [Record] =>
    /// Derives [`Record`](https://docs.rs/tagwire/latest/tagwire/record/trait.Record.html)
    /// (and the `Encode`/`Decode`/`WireType` impls built on it) for a
    /// struct with named fields, in declared field order. A struct with
    /// exactly one field named `value` is treated as a value wrapper
    /// (fungible with bare values of its inner type).
    record::derive
);

synstructure::decl_derive!(
    [Table, attributes(tagwire)] =>
    /// Derives [`Table`](https://docs.rs/tagwire/latest/tagwire/table/trait.Table.html)
    /// for a struct whose fields are all `Option<T>`. Every kept field needs
    /// `#[tagwire(id = N)]`; a declared-but-removed id is recorded with a
    /// struct-level `#[tagwire(deleted(id = N, ty = SomeType))]`. The
    /// table's name (used to derive its wire hash) defaults to the struct's
    /// identifier, or an explicit `#[tagwire(name = "...")]`.
    table::derive
);

synstructure::decl_derive!(
    [Variant] =>
    /// Derives `VariantShape` for an enum where every variant holds exactly
    /// one unnamed field, in declared variant order.
    variant::derive
);

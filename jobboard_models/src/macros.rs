macro_rules! id {
    ($ident:ident) => {
        #[::nutype::nutype(derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Deref,
            From,
            Serialize,
            Deserialize,
        ))]
        pub struct $ident(::uuid::Uuid);

        impl ::schemars::JsonSchema for $ident {
            fn schema_name() -> ::std::string::String {
                <::uuid::Uuid as ::schemars::JsonSchema>::schema_name()
            }

            fn json_schema(
                generator: &mut ::schemars::gen::SchemaGenerator,
            ) -> ::schemars::schema::Schema {
                <::uuid::Uuid as ::schemars::JsonSchema>::json_schema(generator)
            }
        }
    };
}

macro_rules! nutype_string {
    ($ident:ident($($validate:tt)*)) => {
        #[::nutype::nutype(
            sanitize(trim),
            $($validate)*,
            derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                Deref,
                TryFrom,
                Serialize,
                Deserialize,
                JsonSchema,
            )
        )]
        pub struct $ident(String);
    };
}

pub(crate) use id;
pub(crate) use nutype_string;

//! The `markers!` descriptor macro
//!
//! Implements [`Record`](crate::Record) (and
//! [`AsFieldValue`](crate::AsFieldValue), so the type nests inside other
//! records) for a struct from a declarative field listing. The listing is
//! the per-type field-descriptor table: built once, at compile time, from
//! the declaration — the walker never re-derives shape information.

/// Declares the validatable fields of one or more record types.
///
/// Each field names up to three markers: `annotation` (an `@`-token list),
/// `pattern` (a raw regular expression) and `field_err` (the name of a
/// registered field-error mapping). A field listed without markers is
/// still walked, which is how nested records opt in to recursion.
///
/// Fields left out of the listing are invisible to validation.
///
/// # Examples
///
/// ```rust,ignore
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Signup {
///     email: Option<String>,
///     display_name: String,
///     referrer: Profile,
/// }
///
/// fieldcheck::markers! {
///     Signup {
///         email: annotation = "@Required@Email";
///         display_name: annotation = "@NotBlank", field_err = "badName";
///         referrer;
///     }
/// }
/// ```
#[macro_export]
macro_rules! markers {
    ($(
        $ty:ident {
            $( $field:ident $( : $( $marker:ident = $value:literal ),+ )? ; )*
        }
    )+) => {$(
        impl $crate::Record for $ty {
            fn fields(&self) -> ::std::vec::Vec<$crate::BoundField<'_>> {
                ::std::vec![$(
                    $crate::BoundField {
                        name: ::std::stringify!($field),
                        markers: {
                            #[allow(unused_mut)]
                            let mut markers = $crate::Markers::new();
                            $($( markers.$marker = ::std::option::Option::Some($value); )+)?
                            markers
                        },
                        value: $crate::AsFieldValue::field_value(&self.$field),
                    },
                )*]
            }
        }

        impl $crate::AsFieldValue for $ty {
            const KIND: $crate::Kind = $crate::Kind::Record;

            fn field_value(&self) -> $crate::FieldValue<'_> {
                $crate::FieldValue::Record(self)
            }
        }
    )+};
}

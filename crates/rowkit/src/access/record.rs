//! Declaring records with a required/optional field partition.

/// Declares a record whose fields are split into required and optional groups.
///
/// Required fields are stored as-is and implement
/// [`HasRequired`](crate::HasRequired); optional fields are stored as
/// `Option<T>` and implement [`HasOptional`](crate::HasOptional) and
/// [`SetOptional`](crate::SetOptional). Fields are private: the generated
/// `new` takes every required field in declaration order and leaves the
/// optional ones absent, after which all access goes through labels.
///
/// Using a label twice in one record fails to compile.
///
/// ```rust
/// use rowkit::{get_optional, set_optional};
///
/// rowkit::labels! {
///     Host = "host",
///     Port = "port",
///     Timeout = "timeout",
/// }
///
/// rowkit::record! {
///     #[derive(Debug)]
///     pub struct Endpoint {
///         required {
///             Host => host: String,
///             Port => port: u16,
///         }
///         optional {
///             Timeout => timeout: u64,
///         }
///     }
/// }
///
/// let mut endpoint = Endpoint::new("localhost".to_string(), 8080);
/// assert_eq!(get_optional(Timeout, &endpoint), None);
///
/// set_optional(Timeout, &mut endpoint, Some(30));
/// assert_eq!(get_optional(Timeout, &endpoint), Some(&30));
/// ```
///
/// A label may name only one field, across both groups:
///
/// ```compile_fail
/// rowkit::labels! { A = "a" }
///
/// rowkit::record! {
///     struct Twice {
///         required { A => first: u8 }
///         optional { A => second: u8 }
///     }
/// }
/// ```
///
/// Optional fields have no required accessor:
///
/// ```compile_fail
/// rowkit::labels! { A = "a", B = "b" }
///
/// rowkit::record! {
///     struct Pair {
///         required { A => a: u8 }
///         optional { B => b: u8 }
///     }
/// }
///
/// let pair = Pair::new(1);
/// let _ = rowkit::get_required(B, &pair);
/// ```
///
/// Nor does the record answer for labels it does not declare:
///
/// ```compile_fail
/// rowkit::labels! { A = "a", B = "b", C = "c" }
///
/// rowkit::record! {
///     struct Pair {
///         required { A => a: u8 }
///         optional { B => b: u8 }
///     }
/// }
///
/// let pair = Pair::new(1);
/// let _ = rowkit::get_optional(C, &pair);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            required {
                $($(#[$req_meta:meta])* $req_label:path => $req_field:ident : $req_ty:ty),* $(,)?
            }
            optional {
                $($(#[$opt_meta:meta])* $opt_label:path => $opt_field:ident : $opt_ty:ty),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($(#[$req_meta])* $req_field: $req_ty,)*
            $($(#[$opt_meta])* $opt_field: ::core::option::Option<$opt_ty>,)*
        }

        impl $name {
            /// Creates the record from its required fields; optional fields start absent.
            #[allow(clippy::too_many_arguments, clippy::new_without_default)]
            $vis fn new($($req_field: $req_ty),*) -> Self {
                Self {
                    $($req_field,)*
                    $($opt_field: ::core::option::Option::None,)*
                }
            }
        }

        $(
            impl $crate::HasRequired<$req_label> for $name {
                type Value = $req_ty;

                fn required(&self) -> &$req_ty {
                    &self.$req_field
                }

                fn required_mut(&mut self) -> &mut $req_ty {
                    &mut self.$req_field
                }
            }
        )*

        $(impl $crate::access::DeclaresLabel<$req_label> for $name {})*
        $(impl $crate::access::DeclaresLabel<$opt_label> for $name {})*

        $(
            impl $crate::HasOptional<$opt_label> for $name {
                type Value = $opt_ty;

                fn optional(&self) -> ::core::option::Option<&$opt_ty> {
                    self.$opt_field.as_ref()
                }
            }

            impl $crate::SetOptional<$opt_label> for $name {
                fn set_optional(
                    &mut self,
                    value: ::core::option::Option<$opt_ty>,
                ) -> ::core::option::Option<$opt_ty> {
                    ::core::mem::replace(&mut self.$opt_field, value)
                }
            }
        )*
    };
}

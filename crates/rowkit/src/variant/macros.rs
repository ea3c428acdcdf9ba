//! The `variant!` declaration macro.

/// Declares a labelled union and its handler record.
///
/// Each alternative is written `Variant(Payload) as case: Label`: `Variant`
/// becomes the enum variant, `Label` the label type, and `case` the handler
/// field name in the generated handler record. Declaring the same label twice
/// fails to compile.
///
/// The handler record is generic over one handler per label. Closures passed
/// to it should annotate their parameter type, since the expected signature
/// is only known once the record reaches [`match_variant`](crate::match_variant).
///
/// ```rust
/// use rowkit::{field, inj, match_variant};
///
/// rowkit::labels! { Circle = "circle", Square = "square" }
///
/// rowkit::variant! {
///     #[derive(Debug, Clone, Copy)]
///     pub enum Shape with ShapeCases {
///         Round(f64) as circle: Circle,
///         Boxy(f64) as square: Square,
///     }
/// }
///
/// let shape: Shape = inj(field!(Square = 2.0));
/// let area = match_variant(
///     ShapeCases {
///         circle: |r: f64| std::f64::consts::PI * r * r,
///         square: |side: f64| side * side,
///     },
///     shape,
/// );
/// assert_eq!(area, 4.0);
/// ```
///
/// A label may name only one alternative:
///
/// ```compile_fail
/// rowkit::labels! { A = "a" }
///
/// rowkit::variant! {
///     enum Twice with TwiceCases {
///         First(u8) as a: A,
///         Second(u8) as again: A,
///     }
/// }
/// ```
///
/// Injecting a label the union does not declare is rejected:
///
/// ```compile_fail
/// rowkit::labels! { A = "a", B = "b", C = "c" }
///
/// rowkit::variant! {
///     enum AB with AbCases {
///         First(u8) as a: A,
///         Second(u8) as b: B,
///     }
/// }
///
/// let _: AB = rowkit::inj(rowkit::field!(C = 1u8));
/// ```
#[macro_export]
macro_rules! variant {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident with $cases:ident {
            $($(#[$var_meta:meta])* $variant:ident ( $payload:ty ) as $case:ident : $label:path),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($(#[$var_meta])* $variant($payload),)+
        }

        #[doc = ::core::concat!("Handlers for every alternative of [`", ::core::stringify!($name), "`], one field per label.")]
        #[allow(non_camel_case_types)]
        $vis struct $cases<$($case),+> {
            $(pub $case: $case,)+
        }

        #[allow(non_camel_case_types)]
        impl<$($case,)+ __Out> $crate::Match<$cases<$($case),+>, __Out> for $name
        where
            $($case: ::core::ops::FnOnce($payload) -> __Out,)+
        {
            fn match_with(self, cases: $cases<$($case),+>) -> __Out {
                match self {
                    $($name::$variant(payload) => (cases.$case)(payload),)+
                }
            }
        }

        #[allow(non_camel_case_types)]
        impl<'__a, $($case,)+ __Out> $crate::Match<$cases<$($case),+>, __Out> for &'__a $name
        where
            $($case: ::core::ops::FnOnce(&'__a $payload) -> __Out,)+
        {
            fn match_with(self, cases: $cases<$($case),+>) -> __Out {
                match self {
                    $($name::$variant(payload) => (cases.$case)(payload),)+
                }
            }
        }

        impl $crate::Tagged for $name {
            const LABELS: &'static [&'static str] = &[$(<$label as $crate::Label>::NAME),+];

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant(_) => <$label as $crate::Label>::NAME,)+
                }
            }
        }

        $(
            impl $crate::Inject<$label> for $name {
                type Payload = $payload;

                fn inject(payload: $payload) -> Self {
                    $name::$variant(payload)
                }

                #[allow(unreachable_patterns)]
                fn project(&self) -> ::core::option::Option<&$payload> {
                    match self {
                        $name::$variant(payload) => ::core::option::Option::Some(payload),
                        _ => ::core::option::Option::None,
                    }
                }

                #[allow(unreachable_patterns)]
                fn project_into(self) -> ::core::result::Result<$payload, Self> {
                    match self {
                        $name::$variant(payload) => ::core::result::Result::Ok(payload),
                        other => ::core::result::Result::Err(other),
                    }
                }
            }

            impl $crate::HasOptional<$label> for $name {
                type Value = $payload;

                fn optional(&self) -> ::core::option::Option<&$payload> {
                    <Self as $crate::Inject<$label>>::project(self)
                }
            }

            impl ::core::convert::From<$crate::Single<$label, $payload>> for $name {
                fn from(single: $crate::Single<$label, $payload>) -> Self {
                    $name::$variant(single.into_inner())
                }
            }
        )+
    };
}

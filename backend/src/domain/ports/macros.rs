//! `define_port_error!`: declares a `thiserror` enum for a port together with
//! one snake_case constructor per variant.
//!
//! Struct-variant fields become `impl Into<T>` parameters, so callers can pass
//! `&str` where the variant stores a `String`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Unavailable { message: String } => "store unavailable: {message}",
            Full { max_people: u32 } => "full at {max_people}",
            Duplicate { pesel: String, client_id: i32 } => "{pesel} already used by {client_id}",
            Gone => "gone",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = SamplePortError::unavailable("pool closed");
        assert_eq!(err.to_string(), "store unavailable: pool closed");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = SamplePortError::full(4_u32);
        assert_eq!(err, SamplePortError::Full { max_people: 4 });
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = SamplePortError::duplicate("12345678901", 9);
        assert_eq!(err.to_string(), "12345678901 already used by 9");
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(SamplePortError::gone(), SamplePortError::Gone);
    }
}

//! Getter/setter generation for entity attributes.
//!
//! Every attribute is stored as an `Option`: `None` is "absent", which is
//! different from an empty string, zero or an empty list. Each arm emits a
//! getter, a setter and a `clear_*` method returning the attribute to absent.
//! Only the `node`/`nodes` arms produce fallible setters; they consult the
//! attribute's [`TypeValidator`](crate::vocabulary::TypeValidator) before
//! anything is stored.

macro_rules! accessors {
    () => {};

    ($(#[$meta:meta])* text $name:ident, $set:ident, $clear:ident; $($rest:tt)*) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(&self) -> Option<&str> {
            self.$name.as_deref()
        }

        pub fn $set(&mut self, value: impl Into<String>) -> &mut Self {
            self.$name = Some(value.into());
            self
        }

        pub fn $clear(&mut self) -> &mut Self {
            self.$name = None;
            self
        }

        accessors!($($rest)*);
    };

    ($(#[$meta:meta])* copy $name:ident: $ty:ty, $set:ident, $clear:ident; $($rest:tt)*) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(&self) -> Option<$ty> {
            self.$name
        }

        pub fn $set(&mut self, value: $ty) -> &mut Self {
            self.$name = Some(value);
            self
        }

        pub fn $clear(&mut self) -> &mut Self {
            self.$name = None;
            self
        }

        accessors!($($rest)*);
    };

    ($(#[$meta:meta])* value $name:ident: $ty:ty, $set:ident, $clear:ident; $($rest:tt)*) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(&self) -> Option<&$ty> {
            self.$name.as_ref()
        }

        pub fn $set(&mut self, value: $ty) -> &mut Self {
            self.$name = Some(value);
            self
        }

        pub fn $clear(&mut self) -> &mut Self {
            self.$name = None;
            self
        }

        accessors!($($rest)*);
    };

    ($(#[$meta:meta])* entity $name:ident: $ty:ty, $set:ident, $clear:ident; $($rest:tt)*) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(&self) -> Option<&$ty> {
            self.$name.as_deref()
        }

        pub fn $set(&mut self, value: $ty) -> &mut Self {
            self.$name = Some(Box::new(value));
            self
        }

        pub fn $clear(&mut self) -> &mut Self {
            self.$name = None;
            self
        }

        accessors!($($rest)*);
    };

    (
        $(#[$meta:meta])* list $name:ident: $ty:ty,
        $set:ident, $push:ident, $name_mut:ident, $clear:ident;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(&self) -> Option<&[$ty]> {
            self.$name.as_deref()
        }

        /// Replaces the whole list; an empty iterator leaves a present, empty list.
        pub fn $set(&mut self, values: impl IntoIterator<Item = $ty>) -> &mut Self {
            self.$name = Some(values.into_iter().collect());
            self
        }

        pub fn $push(&mut self, value: $ty) -> &mut Self {
            self.$name.get_or_insert_with(Vec::new).push(value);
            self
        }

        /// Mutable access for reordering or editing a present list.
        pub fn $name_mut(&mut self) -> Option<&mut Vec<$ty>> {
            self.$name.as_mut()
        }

        pub fn $clear(&mut self) -> &mut Self {
            self.$name = None;
            self
        }

        accessors!($($rest)*);
    };

    (
        $(#[$meta:meta])* node $name:ident: $validator:path, $set:ident, $clear:ident;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(&self) -> Option<&$crate::vocabulary::Node> {
            self.$name.as_deref()
        }

        /// Stores `value` if its kind is permitted; otherwise the attribute
        /// keeps its previous value.
        pub fn $set(
            &mut self,
            value: impl Into<$crate::vocabulary::Node>,
        ) -> Result<&mut Self, $crate::errors::TypeConstraintViolation> {
            let value = value.into();
            $validator.validate(Some(&value))?;
            self.$name = Some(Box::new(value));
            Ok(self)
        }

        pub fn $clear(&mut self) -> &mut Self {
            self.$name = None;
            self
        }

        accessors!($($rest)*);
    };

    (
        $(#[$meta:meta])* nodes $name:ident: $validator:path,
        $set:ident, $push:ident, $clear:ident;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(&self) -> Option<&[$crate::vocabulary::Node]> {
            self.$name.as_deref()
        }

        /// Replaces the whole list. Every element is checked first; on a
        /// violation nothing is replaced.
        pub fn $set<I>(
            &mut self,
            values: I,
        ) -> Result<&mut Self, $crate::errors::TypeConstraintViolation>
        where
            I: IntoIterator,
            I::Item: Into<$crate::vocabulary::Node>,
        {
            let values = values
                .into_iter()
                .map(|value| {
                    let value = value.into();
                    $validator.validate(Some(&value)).map(|()| value)
                })
                .collect::<Result<Vec<_>, _>>()?;
            self.$name = Some(values);
            Ok(self)
        }

        /// Appends one element after checking its kind.
        pub fn $push(
            &mut self,
            value: impl Into<$crate::vocabulary::Node>,
        ) -> Result<&mut Self, $crate::errors::TypeConstraintViolation> {
            let value = value.into();
            $validator.validate(Some(&value))?;
            self.$name.get_or_insert_with(Vec::new).push(value);
            Ok(self)
        }

        pub fn $clear(&mut self) -> &mut Self {
            self.$name = None;
            self
        }

        accessors!($($rest)*);
    };
}

/// Implements a property-group trait for entities that embed the group.
macro_rules! property_group {
    ($group_trait:ident, $group:ty, $field:ident, $field_mut:ident: $($entity:ty),+ $(,)?) => {
        $(
            impl $group_trait for $entity {
                fn $field(&self) -> &$group {
                    &self.$field
                }

                fn $field_mut(&mut self) -> &mut $group {
                    &mut self.$field
                }
            }
        )+
    };
}

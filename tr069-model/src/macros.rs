//! Declarative generator for data model entities.
//!
//! Each entity is declared once as a table of wire names, Rust types, access
//! modes, facets and defaults, with `///` docs on the object and on each
//! entry. The macro expands that table into:
//!
//! - the struct itself, with one public field per parameter, list parameter,
//!   child object and table, and serde attributes carrying the wire names;
//! - a `Default` impl applying the schema defaults;
//! - a static `SCHEMA` describing the object for the interop layers, with
//!   the doc text kept as each description;
//! - consuming `with_*` builders;
//! - the [`DataObject`](crate::object::DataObject) impl used for access by
//!   wire name.
//!
//! Sections must appear in the order `params`, `lists`, `objects`, `tables`
//! and may be empty.

macro_rules! data_object {
    (@default) => {
        ::core::option::Option::None::<&'static str>
    };
    (@default $value:tt) => {
        ::core::option::Option::Some($value)
    };

    (
        $(#[doc = $doc:literal])*
        $vis:vis struct $name:ident = $path:tt {
            params {
                $(
                    $(#[doc = $pdoc:literal])*
                    $pfield:ident / $pwith:ident : $pty:ty = $pwire:tt,
                        $paccess:ident, $pfacets:expr $(, default $pdefault:tt)? ;
                )*
            }
            lists {
                $(
                    $(#[doc = $ldoc:literal])*
                    $lfield:ident / $lwith:ident : $lty:ty = $lwire:tt,
                        $laccess:ident, $lfacets:expr ;
                )*
            }
            objects {
                $(
                    $(#[doc = $odoc:literal])*
                    $ofield:ident / $owith:ident : $oty:ty = $owire:tt ;
                )*
            }
            tables {
                $(
                    $(#[doc = $tdoc:literal])*
                    $tfield:ident / $twith:ident : $tty:ty = $twire:tt ;
                )*
            }
        }
    ) => {
        $(#[doc = $doc])*
        #[doc = ""]
        #[doc = concat!("Object path: `", $path, "`")]
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[doc = $pdoc])*
                #[serde(rename = $pwire, skip_serializing_if = "Option::is_none")]
                pub $pfield: ::core::option::Option<$pty>,
            )*
            $(
                $(#[doc = $ldoc])*
                #[serde(
                    rename = $lwire,
                    with = "crate::value::list",
                    skip_serializing_if = "Vec::is_empty"
                )]
                pub $lfield: ::std::vec::Vec<$lty>,
            )*
            $(
                $(#[doc = $odoc])*
                #[serde(rename = $owire, skip_serializing_if = "Option::is_none")]
                pub $ofield: ::core::option::Option<$oty>,
            )*
            $(
                $(#[doc = $tdoc])*
                #[serde(rename = $twire, skip_serializing_if = "Vec::is_empty")]
                pub $tfield: ::std::vec::Vec<$tty>,
            )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $pfield: $crate::value::default_value::<$pty>(
                            data_object!(@default $($pdefault)?),
                        ),
                    )*
                    $( $lfield: ::std::vec::Vec::new(), )*
                    $( $ofield: ::core::option::Option::None, )*
                    $( $tfield: ::std::vec::Vec::new(), )*
                }
            }
        }

        impl $name {
            /// Static description of this object: path, parameters, children.
            pub const SCHEMA: &'static $crate::schema::ObjectSchema = &$crate::schema::ObjectSchema {
                name: stringify!($name),
                path: $path,
                description: concat!($($doc, "\n",)*),
                multi_instance: $crate::schema::is_table_path($path),
                parameters: &[
                    $(
                        $crate::schema::ParamSchema {
                            name: $pwire,
                            kind: <$pty as $crate::value::ParamValue>::KIND,
                            list: false,
                            access: $crate::schema::Access::$paccess,
                            facets: $pfacets,
                            default: data_object!(@default $($pdefault)?),
                            description: concat!($($pdoc, "\n",)*),
                        },
                    )*
                    $(
                        $crate::schema::ParamSchema {
                            name: $lwire,
                            kind: <$lty as $crate::value::ParamValue>::KIND,
                            list: true,
                            access: $crate::schema::Access::$laccess,
                            facets: $lfacets,
                            default: ::core::option::Option::None,
                            description: concat!($($ldoc, "\n",)*),
                        },
                    )*
                ],
                children: &[
                    $(
                        $crate::schema::ChildSchema {
                            name: $owire,
                            multi_instance: false,
                            schema: <$oty>::SCHEMA,
                        },
                    )*
                    $(
                        $crate::schema::ChildSchema {
                            name: $twire,
                            multi_instance: true,
                            schema: <$tty>::SCHEMA,
                        },
                    )*
                ],
            };

            $(
                #[doc = concat!("Sets `", $pwire, "` and returns the object for chaining.")]
                pub fn $pwith<V>(mut self, value: V) -> Self
                where
                    $pty: $crate::value::FromArg<V>,
                {
                    self.$pfield = ::core::option::Option::Some(
                        <$pty as $crate::value::FromArg<V>>::from_arg(value),
                    );
                    self
                }
            )*
            $(
                #[doc = concat!("Appends one item to the `", $lwire, "` list.")]
                pub fn $lwith<V>(mut self, item: V) -> Self
                where
                    $lty: $crate::value::FromArg<V>,
                {
                    self.$lfield.push(<$lty as $crate::value::FromArg<V>>::from_arg(item));
                    self
                }
            )*
            $(
                #[doc = concat!("Sets the `", $owire, ".` child object.")]
                pub fn $owith(mut self, child: $oty) -> Self {
                    self.$ofield = ::core::option::Option::Some(child);
                    self
                }
            )*
            $(
                #[doc = concat!("Appends one row to the `", $twire, ".{i}.` table.")]
                pub fn $twith(mut self, row: $tty) -> Self {
                    self.$tfield.push(row);
                    self
                }
            )*
        }

        #[allow(clippy::match_single_binding)]
        impl $crate::object::DataObject for $name {
            fn schema(&self) -> &'static $crate::schema::ObjectSchema {
                Self::SCHEMA
            }

            fn parameter(&self, name: &str) -> ::core::option::Option<::std::string::String> {
                match name {
                    $(
                        $pwire => self.$pfield.as_ref().map($crate::value::ParamValue::to_wire),
                    )*
                    $(
                        $lwire => ::core::option::Option::Some($crate::value::join_list(&self.$lfield)),
                    )*
                    _ => ::core::option::Option::None,
                }
            }

            #[allow(unused_variables)]
            fn set_parameter(
                &mut self,
                name: &str,
                value: &str,
            ) -> ::core::result::Result<(), $crate::object::ModelError> {
                match name {
                    $(
                        $pwire => {
                            self.$pfield = ::core::option::Option::Some(
                                $crate::object::parse_param::<$pty>(name, value)?,
                            );
                            Ok(())
                        }
                    )*
                    $(
                        $lwire => {
                            self.$lfield = $crate::object::parse_list::<$lty>(name, value)?;
                            Ok(())
                        }
                    )*
                    _ => Err($crate::object::ModelError::UnknownParameter(name.to_string())),
                }
            }

            #[allow(unused_mut)]
            fn children(&self) -> ::std::vec::Vec<$crate::object::Child<'_>> {
                let mut out = ::std::vec::Vec::new();
                $(
                    if let ::core::option::Option::Some(child) = &self.$ofield {
                        out.push($crate::object::Child {
                            name: $owire,
                            instance: ::core::option::Option::None,
                            object: child,
                        });
                    }
                )*
                $(
                    for (index, row) in self.$tfield.iter().enumerate() {
                        out.push($crate::object::Child {
                            name: $twire,
                            instance: ::core::option::Option::Some(index + 1),
                            object: row,
                        });
                    }
                )*
                out
            }

            #[allow(unused_mut)]
            fn children_mut(&mut self) -> ::std::vec::Vec<$crate::object::ChildMut<'_>> {
                let mut out = ::std::vec::Vec::new();
                $(
                    if let ::core::option::Option::Some(child) = &mut self.$ofield {
                        out.push($crate::object::ChildMut {
                            name: $owire,
                            instance: ::core::option::Option::None,
                            object: child,
                        });
                    }
                )*
                $(
                    for (index, row) in self.$tfield.iter_mut().enumerate() {
                        out.push($crate::object::ChildMut {
                            name: $twire,
                            instance: ::core::option::Option::Some(index + 1),
                            object: row,
                        });
                    }
                )*
                out
            }

            fn ensure_object(&mut self, name: &str) -> bool {
                match name {
                    $(
                        $owire => {
                            self.$ofield.get_or_insert_with(<$oty>::default);
                            true
                        }
                    )*
                    _ => false,
                }
            }

            fn add_instance(&mut self, table: &str) -> ::core::option::Option<usize> {
                match table {
                    $(
                        $twire => {
                            self.$tfield.push(<$tty>::default());
                            ::core::option::Option::Some(self.$tfield.len())
                        }
                    )*
                    _ => ::core::option::Option::None,
                }
            }

            #[allow(unused_variables)]
            fn delete_instance(&mut self, table: &str, instance: usize) -> bool {
                match table {
                    $(
                        $twire if instance >= 1 && instance <= self.$tfield.len() => {
                            self.$tfield.remove(instance - 1);
                            true
                        }
                    )*
                    _ => false,
                }
            }
        }
    };
}

use std::collections::VecDeque;

use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{ListInfo, TypeInfo, TypePath, Typed};
use crate::ops::{List, ReflectRef};
use crate::{FromReflect, Reflect};

macro_rules! impl_reflect_list {
    ($ty:ident, $path:literal, $name:literal, $module:literal, $get:expr) => {
        impl<T: TypePath> TypePath for $ty<T> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[$path, "<", T::type_path(), ">"]))
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[$name, "<", T::type_name(), ">"]))
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<T: Reflect + Typed> Typed for $ty<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<T: Reflect + Typed> Reflect for $ty<T> {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::List(self)
            }
        }

        impl<T: Reflect + Typed> List for $ty<T> {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                $get(self, index).map(|item| item as &dyn Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }
        }

        impl<T: FromReflect + Typed> FromReflect for $ty<T> {
            fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
                let ReflectRef::List(list) = reflect.reflect_ref() else {
                    return None;
                };
                list.iter().map(T::from_reflect).collect()
            }
        }
    };
}

impl_reflect_list!(Vec, "alloc::vec::Vec", "Vec", "alloc::vec", <[T]>::get);
impl_reflect_list!(
    VecDeque,
    "alloc::collections::VecDeque",
    "VecDeque",
    "alloc::collections",
    VecDeque::get
);

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::FromReflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::DynamicList;

    #[test]
    fn list_paths() {
        assert_eq!(<Vec<Vec<u8>>>::type_name(), "Vec<Vec<u8>>");
        assert!(<VecDeque<i32>>::type_info().as_list().unwrap().item_is::<i32>());
    }

    #[test]
    fn from_dynamic() {
        let mut list = DynamicList::new();
        list.push(1_u16);
        list.push(2_u16);
        assert_eq!(<Vec<u16>>::from_reflect(&list), Some(vec![1, 2]));
        assert_eq!(<VecDeque<u16>>::from_reflect(&list), Some(VecDeque::from([1, 2])));
        assert_eq!(<Vec<u32>>::from_reflect(&list), None);
    }
}

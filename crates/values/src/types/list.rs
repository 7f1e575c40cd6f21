use crate::{DisplayContext, Value};
use vesper_memory::{Borrow, BorrowMut, Ptr, PtrMut};

/// The underlying Vec type used by [List]
pub type ValueVec = smallvec::SmallVec<[Value; 4]>;

/// The sequence type used by the value model
///
/// Lists are shared by reference: cloning a `List` clones the handle, not the
/// data, so mutations made through one handle are visible through all of
/// them. Two lists with equal contents are only *identical* when
/// [List::is_same_instance] says so.
#[derive(Clone, Default)]
pub struct List(PtrMut<ValueVec>);

impl List {
    /// Creates an empty list with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self(ValueVec::with_capacity(capacity).into())
    }

    /// Creates a list containing the provided data
    pub fn with_data(data: ValueVec) -> Self {
        Self(data.into())
    }

    /// Creates a list containing the provided slice of [Values](Value)
    pub fn from_slice(data: &[Value]) -> Self {
        Self(data.iter().cloned().collect::<ValueVec>().into())
    }

    /// Returns the number of entries of the list
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// Returns true if there are no entries in the list
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the list's entries
    pub fn data(&self) -> Borrow<'_, ValueVec> {
        self.0.borrow()
    }

    /// Returns a mutable reference to the list's entries
    pub fn data_mut(&self) -> BorrowMut<'_, ValueVec> {
        self.0.borrow_mut()
    }

    /// Returns true if the provided List shares this list's allocation
    pub fn is_same_instance(&self, other: &Self) -> bool {
        Ptr::ptr_eq(&self.0, &other.0)
    }

    /// Renders the list to the provided display context
    pub fn display(&self, ctx: &mut DisplayContext) {
        ctx.append('[');

        let id = Ptr::address(&self.0);
        if ctx.is_in_parents(id) {
            ctx.append("...");
        } else {
            ctx.push_container(id);

            for (i, value) in self.data().iter().enumerate() {
                if i > 0 {
                    ctx.append(", ");
                }
                value.display(ctx);
            }

            ctx.pop_container();
        }

        ctx.append(']');
    }
}

impl FromIterator<Value> for List {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self(iter.into_iter().collect::<ValueVec>().into())
    }
}

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use generational_box::GenerationalBox;

use crate::composer::NodeId;
use crate::{Composer, Key, Result};

/// Handle on the node currently being built.
///
/// `S` is a marker for the kind of node the scope builds into, which lets
/// builders restrict what may be nested where.
pub struct Scope<S> {
    pub id: NodeId,
    composer: GenerationalBox<Composer>,
    ty: PhantomData<S>,
}

impl<S> Clone for Scope<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Scope<S> {}

impl<S> Scope<S>
where
    S: 'static,
{
    #[inline(always)]
    pub(crate) fn new(id: NodeId, composer: GenerationalBox<Composer>) -> Self {
        Self {
            id,
            composer,
            ty: PhantomData,
        }
    }

    /// Appends a `tag` element and builds its children with `content`.
    pub fn create_node<T, C>(&self, tag: &str, content: C) -> Result<()>
    where
        T: 'static,
        C: FnOnce(Scope<T>) -> Result<()>,
    {
        let id = self.composer.write().create_element(self.id, tag)?;
        content(Scope::new(id, self.composer))
    }

    pub fn text(&self, content: impl Into<String>) -> Result<()> {
        self.composer.write().create_text(self.id, content.into());
        Ok(())
    }

    /// Gives `key` to the first element `content` creates.
    pub fn key<C>(&self, key: impl Into<Key>, content: C) -> Result<()>
    where
        C: FnOnce(Self) -> Result<()>,
    {
        self.composer.write().pending_key = Some(key.into());
        let result = content(*self);
        self.composer.write().pending_key = None;
        result
    }
}

impl<S> Debug for Scope<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope").field("id", &self.id).finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Root;

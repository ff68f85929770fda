use super::*;

impl Render for alloc::string::String {
    delegate_render!(str, self, self.as_str());
}

impl<T> Render for alloc::boxed::Box<T>
where
    T: ?Sized + Render,
{
    delegate_render!(T, self, &**self);
}

impl<T> Render for alloc::rc::Rc<T>
where
    T: ?Sized + Render,
{
    delegate_render!(T, self, &**self);
}

//! Fixed-point traversal of the reflective hierarchy.
//!
//! Starting from a seed [`TypeRef`], the engine registers every named type reachable
//! through:
//!
//! - superclasses, together with their known subclasses and implementors,
//! - known subclasses and implementors of a plain class reference,
//! - array element types and generic type arguments,
//! - instance fields (minus synthetic outer references),
//! - return types of getter-shaped methods.
//!
//! Each name is marked processed before its members are visited, so cyclic graphs
//! terminate and every name yields at most one [`RegistrationRecord`] per run. Pending
//! work lives on an explicit stack, so graph depth is not bounded by the thread stack.

use crate::predicate::DescriptorPredicate;
use crate::request::HierarchyRequest;
use crate::state::ClosureState;
use reflscope_api::{
    ApiResult, RegistrationRecord, RegistrationSink, TypeDescriptor, TypeIndex, TypeName, TypeRef,
};
use tracing::{debug, trace};

/// Pending traversal work.
enum Frame {
    Type(TypeRef),
    Named(TypeName),
    Subtypes(TypeName),
    Implementors(TypeName),
}

pub struct ClosureEngine<'a, S: RegistrationSink + ?Sized> {
    index: &'a dyn TypeIndex,
    writable: &'a DescriptorPredicate,
    state: &'a mut ClosureState,
    sink: &'a mut S,
}

impl<'a, S: RegistrationSink + ?Sized> ClosureEngine<'a, S> {
    pub fn new(
        index: &'a dyn TypeIndex,
        writable: &'a DescriptorPredicate,
        state: &'a mut ClosureState,
        sink: &'a mut S,
    ) -> Self {
        Self {
            index,
            writable,
            state,
            sink,
        }
    }

    /// Expand the seed of a request.
    pub fn process(&mut self, request: &HierarchyRequest) -> ApiResult<()> {
        debug!(
            "Expanding reflective hierarchy of {} (source: {})",
            request.seed(),
            request.source().unwrap_or("<unspecified>")
        );
        self.expand(request.seed(), request)
    }

    pub fn expand(&mut self, ty: &TypeRef, request: &HierarchyRequest) -> ApiResult<()> {
        self.drain(vec![Frame::Type(ty.clone())], request)
    }

    pub fn expand_named_type(&mut self, name: &str, request: &HierarchyRequest) -> ApiResult<()> {
        self.drain(vec![Frame::Named(TypeName::from(name))], request)
    }

    /// Runs pending work until none is left. Frames are pushed in reverse so that
    /// records come out in depth-first, declaration order.
    fn drain(&mut self, mut stack: Vec<Frame>, request: &HierarchyRequest) -> ApiResult<()> {
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Type(ty) => self.visit_type(ty, request, &mut stack),
                Frame::Named(name) => self.visit_named(&name, request, &mut stack)?,
                Frame::Subtypes(name) => {
                    let subtypes = self.index.subtypes_of(&name)?;
                    stack.extend(subtypes.into_iter().rev().map(Frame::Named));
                }
                Frame::Implementors(name) => {
                    let implementors = self.index.implementors_of(&name)?;
                    stack.extend(implementors.into_iter().rev().map(Frame::Named));
                }
            }
        }
        Ok(())
    }

    fn visit_type(&mut self, ty: TypeRef, request: &HierarchyRequest, stack: &mut Vec<Frame>) {
        match ty {
            TypeRef::Void | TypeRef::Primitive(_) | TypeRef::TypeVariable(_) => {}
            TypeRef::Class(name) => {
                if self.should_skip(&name, request) {
                    return;
                }
                // The runtime value behind a supertype may be any concrete subtype
                stack.push(Frame::Implementors(name.clone()));
                stack.push(Frame::Subtypes(name.clone()));
                stack.push(Frame::Named(name));
            }
            TypeRef::Array(element) => stack.push(Frame::Type(*element)),
            TypeRef::Parameterized { name, arguments } => {
                stack.extend(arguments.into_iter().rev().map(Frame::Type));
                // Only the raw type is registered, its subtypes are not
                if !request.is_ignored(&name) {
                    stack.push(Frame::Named(name));
                }
            }
        }
    }

    fn visit_named(
        &mut self,
        name: &str,
        request: &HierarchyRequest,
        stack: &mut Vec<Frame>,
    ) -> ApiResult<()> {
        if self.should_skip(name, request) {
            return Ok(());
        }
        self.state.mark_processed(name);

        let descriptor = match request.index_override() {
            Some(index) => index.resolve(name)?,
            None => self.index.resolve(name)?,
        };

        let writable = self.final_fields_writable(descriptor.as_deref());
        debug!("Registering {} for reflection (final fields writable: {})", name, writable);
        self.sink.accept(
            RegistrationRecord::builder(name)
                .methods(true)
                .fields(true)
                .final_fields_writable(writable)
                .build(),
        )?;

        let Some(descriptor) = descriptor else {
            trace!("{} is not in the type index", name);
            self.state.record_unresolved(name);
            return Ok(());
        };

        let getters = descriptor
            .methods
            .iter()
            .filter(|method| method.is_getter_shaped())
            .map(|method| Frame::Type(method.return_type.clone()));
        // Static state (loggers mostly) and links to enclosing instances are not
        // part of the object's own shape
        let fields = descriptor
            .fields
            .iter()
            .filter(|field| !field.is_static() && !field.is_synthetic_outer_reference())
            .map(|field| Frame::Type(field.type_ref.clone()));
        let pending: Vec<Frame> = fields.chain(getters).collect();
        stack.extend(pending.into_iter().rev());

        // Expanded as a class reference, so sibling subtypes come along
        if let Some(super_name) = &descriptor.super_name {
            stack.push(Frame::Type(TypeRef::Class(super_name.clone())));
        }

        Ok(())
    }

    fn should_skip(&self, name: &str, request: &HierarchyRequest) -> bool {
        let skip = request.is_ignored(name) || self.state.is_processed(name);
        if skip {
            trace!("Skipping {}", name);
        }
        skip
    }

    fn final_fields_writable(&self, descriptor: Option<&TypeDescriptor>) -> bool {
        descriptor.is_some_and(|desc| self.writable.test(desc))
    }
}

//! Static endpoint definitions with a type-state builder.
//!
//! An [`Endpoint`] pins down one operation of the API: its id, verb, path
//! template and response format. Facades build a fresh
//! [`RequestDescriptor`] from it on every call.

use std::fmt;
use std::marker::PhantomData;

use crate::method::RestMethod;
use crate::request::RequestDescriptor;
use crate::response::ResponseFormat;

/// Marker types for builder state tracking.
pub mod builder_state {
    /// Marker for a field that has not been set.
    pub struct Missing;
    /// Marker for a field that has been set.
    pub struct Present;
}

use builder_state::{Missing, Present};

/// A single API operation, parameterized by its response format.
///
/// ## Examples
///
/// ```rust
/// use yabadu_lib::{Endpoint, RestMethod};
/// use yabadu_lib::response::JsonFormat;
///
/// #[derive(serde::Deserialize)]
/// struct Application { id: String }
///
/// let endpoint: Endpoint<JsonFormat<Application>> = Endpoint::builder()
///     .id("privateLabelApplicationGet")
///     .method(RestMethod::Get)
///     .path("/private-label/applications/{applicationId}")
///     .build();
///
/// assert_eq!(endpoint.path_params(), vec!["applicationId"]);
/// ```
pub struct Endpoint<F: ResponseFormat> {
    id: String,
    method: RestMethod,
    path: String,
    description: Option<String>,
    _format: PhantomData<F>,
}

impl<F: ResponseFormat> Clone for Endpoint<F> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            method: self.method,
            path: self.path.clone(),
            description: self.description.clone(),
            _format: PhantomData,
        }
    }
}

impl<F: ResponseFormat> fmt::Debug for Endpoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("id", &self.id)
            .field("method", &self.method)
            .field("path", &self.path)
            .field("description", &self.description)
            .finish()
    }
}

impl<F: ResponseFormat> Endpoint<F> {
    /// Creates a new endpoint builder.
    pub fn builder() -> EndpointBuilder<Missing, Missing, Missing, F> {
        EndpointBuilder::new()
    }

    /// Returns the operation id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Returns the path template.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Starts a request descriptor for one call to this endpoint.
    pub fn request(&self) -> RequestDescriptor<F> {
        RequestDescriptor::new(&self.id, self.method, &self.path)
    }

    /// Extracts path parameter names in the order they appear.
    pub fn path_params(&self) -> Vec<&str> {
        placeholders(&self.path)
    }
}

/// Returns every `{name}` placeholder in a path template.
pub(crate) fn placeholders(path: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            break;
        };
        if end > 0 {
            params.push(&after[..end]);
        }
        rest = &after[end + 1..];
    }
    params
}

/// Type-state builder for [`Endpoint`].
///
/// `build()` only exists once id, method and path are all set.
pub struct EndpointBuilder<Id, Method, Path, F: ResponseFormat> {
    id: Option<String>,
    method: Option<RestMethod>,
    path: Option<String>,
    description: Option<String>,
    _phantom: PhantomData<(Id, Method, Path, F)>,
}

impl<F: ResponseFormat> EndpointBuilder<Missing, Missing, Missing, F> {
    /// Creates a new endpoint builder with no fields set.
    pub fn new() -> Self {
        Self {
            id: None,
            method: None,
            path: None,
            description: None,
            _phantom: PhantomData,
        }
    }
}

impl<F: ResponseFormat> Default for EndpointBuilder<Missing, Missing, Missing, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, P, F: ResponseFormat> EndpointBuilder<Missing, M, P, F> {
    /// Sets the operation id.
    pub fn id(self, id: impl Into<String>) -> EndpointBuilder<Present, M, P, F> {
        EndpointBuilder {
            id: Some(id.into()),
            method: self.method,
            path: self.path,
            description: self.description,
            _phantom: PhantomData,
        }
    }
}

impl<I, P, F: ResponseFormat> EndpointBuilder<I, Missing, P, F> {
    /// Sets the HTTP method.
    pub fn method(self, method: RestMethod) -> EndpointBuilder<I, Present, P, F> {
        EndpointBuilder {
            id: self.id,
            method: Some(method),
            path: self.path,
            description: self.description,
            _phantom: PhantomData,
        }
    }
}

impl<I, M, F: ResponseFormat> EndpointBuilder<I, M, Missing, F> {
    /// Sets the path template, which may contain `{param}` placeholders.
    pub fn path(self, path: impl Into<String>) -> EndpointBuilder<I, M, Present, F> {
        EndpointBuilder {
            id: self.id,
            method: self.method,
            path: Some(path.into()),
            description: self.description,
            _phantom: PhantomData,
        }
    }
}

impl<I, M, P, F: ResponseFormat> EndpointBuilder<I, M, P, F> {
    /// Sets a description.
    pub fn description(self, description: impl Into<String>) -> Self {
        EndpointBuilder {
            description: Some(description.into()),
            ..self
        }
    }
}

impl<F: ResponseFormat> EndpointBuilder<Present, Present, Present, F> {
    /// Builds the endpoint.
    pub fn build(self) -> Endpoint<F> {
        Endpoint {
            id: self.id.unwrap_or_default(),
            method: self.method.unwrap_or(RestMethod::Get),
            path: self.path.unwrap_or_default(),
            description: self.description,
            _format: PhantomData,
        }
    }
}

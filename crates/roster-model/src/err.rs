// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// Two slots were declared with the same external id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicateSlotIdError {
    id: u32,
}

impl DuplicateSlotIdError {
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl std::fmt::Display for DuplicateSlotIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Duplicate slot id {} in model input", self.id)
    }
}

impl std::error::Error for DuplicateSlotIdError {}

/// Two workers were declared with the same external id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicateWorkerIdError {
    id: u32,
}

impl DuplicateWorkerIdError {
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl std::fmt::Display for DuplicateWorkerIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Duplicate worker id {} in model input", self.id)
    }
}

impl std::error::Error for DuplicateWorkerIdError {}

/// Errors that can occur while building a [`Model`](crate::model::Model).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelError {
    DuplicateSlotId(DuplicateSlotIdError),
    DuplicateWorkerId(DuplicateWorkerIdError),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::DuplicateSlotId(e) => write!(f, "{}", e),
            ModelError::DuplicateWorkerId(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ModelError {}

impl From<DuplicateSlotIdError> for ModelError {
    fn from(err: DuplicateSlotIdError) -> Self {
        ModelError::DuplicateSlotId(err)
    }
}

impl From<DuplicateWorkerIdError> for ModelError {
    fn from(err: DuplicateWorkerIdError) -> Self {
        ModelError::DuplicateWorkerId(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages_name_the_offending_id() {
        let e = DuplicateSlotIdError::new(3);
        assert_eq!(format!("{}", e), "Duplicate slot id 3 in model input");

        let e = DuplicateWorkerIdError::new(17);
        assert_eq!(format!("{}", e), "Duplicate worker id 17 in model input");
    }

    #[test]
    fn test_from_conversions_preserve_payload() {
        let err: ModelError = DuplicateSlotIdError::new(9).into();
        match err {
            ModelError::DuplicateSlotId(inner) => assert_eq!(inner.id(), 9),
            other => panic!("expected DuplicateSlotId, got {:?}", other),
        }

        let err: ModelError = DuplicateWorkerIdError::new(4).into();
        match err {
            ModelError::DuplicateWorkerId(inner) => assert_eq!(inner.id(), 4),
            other => panic!("expected DuplicateWorkerId, got {:?}", other),
        }
    }
}

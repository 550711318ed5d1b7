use bytes::BytesMut;

/// Serializes a value straight into a header buffer without going through
/// `fmt::Display`.
pub(crate) trait BufferWriter {
    fn write_to_buffer(&self, buffer: &mut BytesMut);

    fn estimated_size(&self) -> usize;
}

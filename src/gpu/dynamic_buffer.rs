//! Vertex buffers that grow with the scene.
//!
//! Scene switches change the vertex count by orders of magnitude (three
//! spheres vs. a 200-star galaxy), so buffers grow 2x when data exceeds
//! capacity and never shrink.

use std::marker::PhantomData;

/// A typed GPU buffer that reallocates when a write does not fit.
pub struct DynamicBuffer<T> {
    buffer: wgpu::Buffer,
    /// Capacity in items.
    capacity: usize,
    /// Items written by the last [`write`](Self::write).
    count: usize,
    usage: wgpu::BufferUsages,
    label: &'static str,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> DynamicBuffer<T> {
    /// Empty buffer with room for `capacity` items (at least one).
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        label: &'static str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: Self::allocate(device, label, capacity, usage),
            capacity,
            count: 0,
            usage,
            label,
            _marker: PhantomData,
        }
    }

    fn allocate(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (capacity * size_of::<T>()) as u64,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Replace the contents with `data`, growing if necessary.
    ///
    /// Returns `true` if the buffer was reallocated.
    pub fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        let reallocated = data.len() > self.capacity;
        if reallocated {
            let new_capacity = grown_capacity(self.capacity, data.len());
            log::debug!(
                "{}: growing {} -> {new_capacity} items",
                self.label,
                self.capacity
            );
            self.buffer =
                Self::allocate(device, self.label, new_capacity, self.usage);
            self.capacity = new_capacity;
        }
        if !data.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(data));
        }
        self.count = data.len();
        reallocated
    }

    /// The underlying wgpu buffer.
    #[must_use]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Items written by the last write.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the last write was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// 2x growth over what is needed, and at least 1024 items more than the
/// current capacity.
fn grown_capacity(current: usize, needed: usize) -> usize {
    (needed * 2).max(current + 1024)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_doubles_the_request() {
        assert_eq!(grown_capacity(1024, 5000), 10_000);
    }

    #[test]
    fn growth_has_a_minimum_step() {
        assert_eq!(grown_capacity(4096, 4097), 8194);
        assert_eq!(grown_capacity(10_000, 10_001), 20_002);
        assert_eq!(grown_capacity(1, 2), 1025);
    }
}

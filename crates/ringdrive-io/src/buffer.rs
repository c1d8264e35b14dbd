//! Deinterleaved multi-channel sample storage.

/// Audio held as one `Vec<f32>` per channel, all the same length.
///
/// WAV files store frames interleaved (`L R L R ...`); engines want one
/// slice per channel. `ChannelBuffer` converts between the two and hands
/// out per-block channel slices for in-place processing.
///
/// # Example
///
/// ```rust
/// use ringdrive_io::ChannelBuffer;
///
/// let buffer = ChannelBuffer::from_interleaved(&[1.0, 2.0, 3.0, 4.0], 2);
/// assert_eq!(buffer.channel(0), Some(&[1.0, 3.0][..]));
/// assert_eq!(buffer.channel(1), Some(&[2.0, 4.0][..]));
/// assert_eq!(buffer.to_interleaved(), vec![1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelBuffer {
    channels: Vec<Vec<f32>>,
}

impl ChannelBuffer {
    /// Build from per-channel vectors.
    ///
    /// Longer channels are truncated to the shortest so every channel has
    /// the same frame count.
    pub fn new(mut channels: Vec<Vec<f32>>) -> Self {
        let frames = channels.iter().map(Vec::len).min().unwrap_or(0);
        for channel in &mut channels {
            channel.truncate(frames);
        }
        Self { channels }
    }

    /// `num_channels` channels of silence, `num_frames` long.
    pub fn silence(num_channels: usize, num_frames: usize) -> Self {
        Self {
            channels: vec![vec![0.0; num_frames]; num_channels],
        }
    }

    /// Split interleaved frames into channels.
    ///
    /// A trailing partial frame is dropped. `num_channels == 0` yields an
    /// empty buffer.
    pub fn from_interleaved(samples: &[f32], num_channels: usize) -> Self {
        if num_channels == 0 {
            return Self::default();
        }
        let frames = samples.len() / num_channels;
        let mut channels = vec![Vec::with_capacity(frames); num_channels];
        for frame in samples.chunks_exact(num_channels) {
            for (channel, &sample) in channels.iter_mut().zip(frame) {
                channel.push(sample);
            }
        }
        Self { channels }
    }

    /// Interleave channels back into frames.
    pub fn to_interleaved(&self) -> Vec<f32> {
        let frames = self.num_frames();
        let mut out = Vec::with_capacity(frames * self.num_channels());
        for i in 0..frames {
            for channel in &self.channels {
                out.push(channel[i]);
            }
        }
        out
    }

    /// Number of channels.
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn num_frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// True when there are no frames.
    pub fn is_empty(&self) -> bool {
        self.num_frames() == 0
    }

    /// Samples of channel `index`.
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// All channels.
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// Consume into per-channel vectors.
    pub fn into_channels(self) -> Vec<Vec<f32>> {
        self.channels
    }

    /// Every sample of every channel, channel after channel.
    pub fn samples(&self) -> impl Iterator<Item = f32> + '_ {
        self.channels.iter().flatten().copied()
    }

    /// Call `f` on consecutive blocks of at most `block_size` frames.
    ///
    /// `f` receives one mutable slice per channel, all the same length. A
    /// `block_size` of 0 is treated as 1.
    pub fn for_each_block_mut<F>(&mut self, block_size: usize, mut f: F)
    where
        F: FnMut(&mut [&mut [f32]]),
    {
        let block_size = block_size.max(1);
        let frames = self.num_frames();
        let mut start = 0;
        while start < frames {
            let end = (start + block_size).min(frames);
            let mut block: Vec<&mut [f32]> = self
                .channels
                .iter_mut()
                .map(|channel| &mut channel[start..end])
                .collect();
            f(&mut block);
            start = end;
        }
    }
}

// Copyright 2026 The madlad-adapter Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use tch::{Cuda, Device, Kind};

/// Compute device and numeric precision the model is bound to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub device: Device,
    pub kind: Kind,
}

impl Placement {
    /// Picks CUDA when available, falling back to the CPU.
    pub fn detect() -> Placement {
        Placement::for_device(Device::cuda_if_available())
    }

    pub fn for_device(device: Device) -> Placement {
        Placement {
            device,
            kind: precision_for(device),
        }
    }
}

/// Half precision on accelerators, full precision otherwise.
pub fn precision_for(device: Device) -> Kind {
    match device {
        Device::Cuda(_) => Kind::Half,
        _ => Kind::Float,
    }
}

/// Waits for pending kernels on a CUDA device so that memory held by dropped
/// tensors is handed back to the allocator. No-op on other devices.
pub(crate) fn release_device_memory(device: Device) {
    if let Device::Cuda(index) = device {
        if Cuda::is_available() {
            Cuda::synchronize(index as i64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_follows_device() {
        assert_eq!(precision_for(Device::Cpu), Kind::Float);
        assert_eq!(precision_for(Device::Cuda(0)), Kind::Half);
    }

    #[test]
    fn cpu_release_is_noop() {
        release_device_memory(Device::Cpu);
    }
}

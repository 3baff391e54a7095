use crate::inventory::{Gpu, Server};


/// Keeps only the devices satisfying the predicate. Every server entry
/// survives, with an empty device list if nothing matched, so a report can
/// still show "0 matching devices" instead of dropping the server silently.
pub fn filter_gpus(servers: &[Server], predicate: impl Fn(&Gpu) -> bool) -> Vec<Server> {
    servers
        .iter()
        .map(|server| Server {
            name: server.name.clone(),
            devices: server
                .devices
                .iter()
                .filter(|&gpu| predicate(gpu))
                .cloned()
                .collect(),
        })
        .collect()
}

/// Returns the servers with only their free devices, as judged by the
/// supplied capability.
pub fn filter_free_gpus(servers: &[Server], is_free: impl Fn(&Gpu) -> bool) -> Vec<Server> {
    filter_gpus(servers, is_free)
}

pub fn filter_used_gpus(servers: &[Server], is_free: impl Fn(&Gpu) -> bool) -> Vec<Server> {
    filter_gpus(servers, |gpu| !is_free(gpu))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gpu(index: u32, used_memory: &str) -> Gpu {
        Gpu {
            name: "A100".to_string(),
            index,
            free_memory: "512MiB".to_string(),
            used_memory: used_memory.to_string(),
            total_memory: "512MiB".to_string(),
        }
    }

    fn server(name: &str, devices: Vec<Gpu>) -> Server {
        Server {
            name: name.to_string(),
            devices,
        }
    }

    fn is_free(gpu: &Gpu) -> bool {
        gpu.used_memory == "0MiB"
    }

    #[test]
    fn keeps_every_server_entry() {
        let servers = vec![
            server("gpu1", vec![gpu(0, "512MiB")]),
            server("gpu2", vec![]),
        ];

        let filtered = filter_gpus(&servers, |_| false);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "gpu1");
        assert!(filtered[0].devices.is_empty());
        assert_eq!(filtered[1].name, "gpu2");
        assert!(filtered[1].devices.is_empty());
    }

    #[test]
    fn preserves_device_order() {
        let servers = vec![server(
            "gpu1",
            vec![gpu(0, "0MiB"), gpu(1, "512MiB"), gpu(2, "0MiB"), gpu(3, "0MiB")],
        )];

        let filtered = filter_gpus(&servers, is_free);

        let indexes: Vec<u32> = filtered[0].devices.iter().map(|g| g.index).collect();
        assert_eq!(indexes, vec![0, 2, 3]);
    }

    #[test]
    fn free_and_used_partition_the_devices() {
        let servers = vec![server(
            "gpu1",
            vec![gpu(0, "0MiB"), gpu(1, "512MiB"), gpu(2, "0MiB")],
        )];

        let free = filter_free_gpus(&servers, is_free);
        let used = filter_used_gpus(&servers, is_free);

        let free_indexes: Vec<u32> = free[0].devices.iter().map(|g| g.index).collect();
        let used_indexes: Vec<u32> = used[0].devices.iter().map(|g| g.index).collect();

        assert_eq!(free_indexes, vec![0, 2]);
        assert_eq!(used_indexes, vec![1]);
        assert_eq!(
            free[0].devices.len() + used[0].devices.len(),
            servers[0].devices.len()
        );
    }

    #[test]
    fn does_not_mutate_input() {
        let servers = vec![server("gpu1", vec![gpu(0, "512MiB"), gpu(1, "0MiB")])];
        let snapshot = servers.clone();

        let _ = filter_gpus(&servers, is_free);

        assert_eq!(servers, snapshot);
    }
}

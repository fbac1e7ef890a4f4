// Pin the benchmarking thread to one CPU so the scheduler cannot migrate it
// between cases.

use std::io;

#[cfg(target_os = "linux")]
pub fn pin_current_thread(cpu: usize) -> io::Result<()> {
   use nix::sched::{sched_setaffinity, CpuSet};
   use nix::unistd::Pid;

   let mut set = CpuSet::new();
   set.set(cpu).map_err(io::Error::from)?;
   // pid 0 is the calling thread
   sched_setaffinity(Pid::from_raw(0), &set).map_err(io::Error::from)
}

#[cfg(not(target_os = "linux"))]
pub fn pin_current_thread(_cpu: usize) -> io::Result<()> {
   Err(io::Error::new(io::ErrorKind::Unsupported, "CPU pinning is only implemented on Linux"))
}

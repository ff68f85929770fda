//! Binary whose size must not change when the `call-sites` feature adds `dbgout` statements
//! while the `enabled` feature is off.
#![no_std]
#![no_main]
#![cfg_attr(not(feature = "call-sites"), allow(unused_variables))]

use core::sync::atomic::{AtomicU32, AtomicU8, Ordering};

use cortex_m_rt::entry;

static LAST_BYTE: AtomicU8 = AtomicU8::new(0);
static TICKS: AtomicU32 = AtomicU32::new(0);

#[dbgout::global_sink]
struct Port;

impl dbgout::GlobalSink for Port {
    fn write(bytes: &[u8]) {
        for byte in bytes {
            LAST_BYTE.store(*byte, Ordering::Relaxed);
        }
    }
}

impl dbgout::Flush for Port {
    fn flush() {}
}

struct Sample {
    channel: u8,
    raw: u16,
}

impl dbgout::Render for Sample {
    fn render(&self) {
        "ch".render();
        self.channel.render();
        "=".render();
        self.raw.render();
    }
}

#[inline(never)]
fn step(tick: u32) -> u32 {
    let sample = Sample {
        channel: (tick % 4) as u8,
        raw: (tick * 7) as u16,
    };
    let ratio = f32::from(sample.raw) / 4095.0;

    #[cfg(feature = "call-sites")]
    dbgout::dbgval!(tick, sample, ratio);
    #[cfg(feature = "call-sites")]
    dbgout::dbgfunc!(ratio > 0.5);
    #[cfg(feature = "call-sites")]
    dbgout::dbgref!("step");
    #[cfg(feature = "call-sites")]
    dbgout::dbgln!(-1i64);

    u32::from(sample.raw) + u32::from(sample.channel)
}

#[entry]
fn main() -> ! {
    loop {
        let tick = TICKS.fetch_add(1, Ordering::Relaxed);
        TICKS.store(step(tick), Ordering::Relaxed);
    }
}

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

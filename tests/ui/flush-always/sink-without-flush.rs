#[dbgout::global_sink]
struct Serial;

impl dbgout::GlobalSink for Serial {
    fn write(bytes: &[u8]) {
        let _ = bytes;
    }
}

fn main() {
    dbgout::dbgln!(1);
}

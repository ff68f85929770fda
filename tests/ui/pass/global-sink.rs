#[dbgout::global_sink]
struct Serial;

impl dbgout::GlobalSink for Serial {
    fn write(bytes: &[u8]) {
        let _ = bytes;
    }
}

impl dbgout::Flush for Serial {
    fn flush() {}
}

fn main() {
    let x = 1;
    dbgout::dbgln!(x);
    dbgout::dbgref!("reached");
    dbgout::dbgfunc!(dbgout::pair!(x));
    dbgout::dbgval!(x, x + 1, "lit", 1.5);
}

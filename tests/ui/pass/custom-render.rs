use dbgout::Render;

struct Millivolts(u32);

impl Render for Millivolts {
    fn render(&self) {
        self.0.render();
        "mV".render();
    }
}

struct Reading<'a> {
    channel: &'a str,
    level: Millivolts,
}

impl Render for Reading<'_> {
    fn render(&self) {
        self.channel.render();
        ": ".render();
        self.level.render();
    }
}

fn main() {
    let reading = Reading {
        channel: "A0",
        level: Millivolts(3300),
    };
    dbgout::dbgval!(reading, reading.level);
    dbgout::dbgref!(&reading);
}

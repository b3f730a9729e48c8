use rack2svg::{generate_svg, parse_rackml};

fn main() {
    let source = r#"<racks base="https://wiki.example/hw/">
  <rack name="A1" height="12">
    <patch>PP-A1</patch>
    <switch href="sw-a1">Top of rack</switch>
    <gap/>
    <server height="2" href="web-01">web-01</server>
    <storage height="3">SAN</storage>
    <ups height="2" at="1">UPS</ups>
  </rack>
</racks>"#;
    let racks = parse_rackml(source).unwrap();
    println!("{}", generate_svg(&racks));
}

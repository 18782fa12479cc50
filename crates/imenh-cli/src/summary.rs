use std::path::Path;

use console::Style;
use imenh_core::io::codec::EncodeSettings;
use imenh_core::pipeline::config::{BlurType, EnhanceParams};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_enhance_summary(
    input: &str,
    params: &EnhanceParams,
    settings: EncodeSettings,
    output_dir: &Path,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Image Enhancement"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(17)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Input"), s.path.apply_to(input));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output_dir.display())
    );
    println!();

    // Blur
    if params.blur == BlurType::None {
        println!(
            "  {:<14}{}",
            s.header.apply_to("Blur"),
            s.disabled.apply_to("none")
        );
    } else {
        println!("  {}", s.header.apply_to("Blur"));
        println!(
            "    {:<12}{}",
            s.label.apply_to("Type"),
            s.method.apply_to(params.blur)
        );
        println!(
            "    {:<12}{}",
            s.label.apply_to("Kernel"),
            s.value.apply_to(format!("{} px", params.blur_kernel_size))
        );
    }
    println!();

    // Tone
    println!("  {}", s.header.apply_to("Tone"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Mode"),
        s.method
            .apply_to(if params.enhance_grayscale { "grayscale" } else { "color" })
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Contrast"),
        s.value.apply_to(format!("{:.1}", params.contrast))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Brightness"),
        s.value.apply_to(params.brightness)
    );
    if params.enhance_grayscale {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Balance"),
            s.disabled.apply_to("ignored")
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Balance"),
            s.value.apply_to(params.color_balance)
        );
    }
    println!();

    println!(
        "  {:<14}{}",
        s.header.apply_to("Cartoonize"),
        if params.cartoonize {
            s.method.apply_to("on")
        } else {
            s.disabled.apply_to("off")
        }
    );

    match settings {
        EncodeSettings::Png => println!(
            "  {:<14}{}",
            s.header.apply_to("Encode"),
            s.method.apply_to(settings.format())
        ),
        EncodeSettings::Jpeg { quality } => println!(
            "  {:<14}{} {}",
            s.header.apply_to("Encode"),
            s.method.apply_to(settings.format()),
            s.value.apply_to(format!("q{quality}"))
        ),
    }
    println!();
}

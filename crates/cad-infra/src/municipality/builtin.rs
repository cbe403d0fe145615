use async_trait::async_trait;
use cad_core::ports::{MunicipalitySourceError, MunicipalitySourcePort};
use cad_core::MunicipalityOption;

/// Municipalities of Mato Grosso as `(label, value)`, in alphabetical order.
const MATO_GROSSO: &[(&str, &str)] = &[
    ("Acorizal", "acorizal"),
    ("Água Boa", "agua-boa"),
    ("Alta Floresta", "alta-floresta"),
    ("Alto Araguaia", "alto-araguaia"),
    ("Alto Boa Vista", "alto-boa-vista"),
    ("Alto Garças", "alto-garcas"),
    ("Alto Paraguai", "alto-paraguai"),
    ("Alto Taquari", "alto-taquari"),
    ("Apiacás", "apiacas"),
    ("Araguaiana", "araguaiana"),
    ("Araguainha", "araguainha"),
    ("Araputanga", "araputanga"),
    ("Arenápolis", "arenapolis"),
    ("Aripuanã", "aripuana"),
    ("Barão de Melgaço", "barao-de-melgaco"),
    ("Barra do Bugres", "barra-do-bugres"),
    ("Barra do Garças", "barra-do-garcas"),
    ("Boa Esperança do Norte", "boa-esperanca-do-norte"),
    ("Bom Jesus do Araguaia", "bom-jesus-do-araguaia"),
    ("Brasnorte", "brasnorte"),
    ("Cáceres", "caceres"),
    ("Campinápolis", "campinapolis"),
    ("Campo Novo do Parecis", "campo-novo-do-parecis"),
    ("Campo Verde", "campo-verde"),
    ("Campos de Júlio", "campos-de-julio"),
    ("Canabrava do Norte", "canabrava-do-norte"),
    ("Canarana", "canarana"),
    ("Carlinda", "carlinda"),
    ("Castanheira", "castanheira"),
    ("Chapada dos Guimarães", "chapada-dos-guimaraes"),
    ("Cláudia", "claudia"),
    ("Cocalinho", "cocalinho"),
    ("Colíder", "colider"),
    ("Colniza", "colniza"),
    ("Comodoro", "comodoro"),
    ("Confresa", "confresa"),
    ("Conquista D'Oeste", "conquista-doeste"),
    ("Cotriguaçu", "cotriguacu"),
    ("Cuiabá", "cuiaba"),
    ("Curvelândia", "curvelandia"),
    ("Denise", "denise"),
    ("Diamantino", "diamantino"),
    ("Dom Aquino", "dom-aquino"),
    ("Feliz Natal", "feliz-natal"),
    ("Figueirópolis D'Oeste", "figueiropolis-doeste"),
    ("Gaúcha do Norte", "gaucha-do-norte"),
    ("General Carneiro", "general-carneiro"),
    ("Glória D'Oeste", "gloria-doeste"),
    ("Guarantã do Norte", "guaranta-do-norte"),
    ("Guiratinga", "guiratinga"),
    ("Indiavaí", "indiavai"),
    ("Ipiranga do Norte", "ipiranga-do-norte"),
    ("Itanhangá", "itanhanga"),
    ("Itaúba", "itauba"),
    ("Itiquira", "itiquira"),
    ("Jaciara", "jaciara"),
    ("Jangada", "jangada"),
    ("Jauru", "jauru"),
    ("Juara", "juara"),
    ("Juína", "juina"),
    ("Juruena", "juruena"),
    ("Juscimeira", "juscimeira"),
    ("Lambari D'Oeste", "lambari-doeste"),
    ("Lucas do Rio Verde", "lucas-do-rio-verde"),
    ("Luciara", "luciara"),
    ("Marcelândia", "marcelandia"),
    ("Matupá", "matupa"),
    ("Mirassol D'Oeste", "mirassol-doeste"),
    ("Nobres", "nobres"),
    ("Nortelândia", "nortelandia"),
    ("Nossa Senhora do Livramento", "nossa-senhora-do-livramento"),
    ("Nova Bandeirantes", "nova-bandeirantes"),
    ("Nova Brasilândia", "nova-brasilandia"),
    ("Nova Canaã do Norte", "nova-canaa-do-norte"),
    ("Nova Guarita", "nova-guarita"),
    ("Nova Lacerda", "nova-lacerda"),
    ("Nova Marilândia", "nova-marilandia"),
    ("Nova Maringá", "nova-maringa"),
    ("Nova Monte Verde", "nova-monte-verde"),
    ("Nova Mutum", "nova-mutum"),
    ("Nova Nazaré", "nova-nazare"),
    ("Nova Olímpia", "nova-olimpia"),
    ("Nova Santa Helena", "nova-santa-helena"),
    ("Nova Ubiratã", "nova-ubirata"),
    ("Nova Xavantina", "nova-xavantina"),
    ("Novo Horizonte do Norte", "novo-horizonte-do-norte"),
    ("Novo Mundo", "novo-mundo"),
    ("Novo Santo Antônio", "novo-santo-antonio"),
    ("Novo São Joaquim", "novo-sao-joaquim"),
    ("Paranaíta", "paranaita"),
    ("Paranatinga", "paranatinga"),
    ("Pedra Preta", "pedra-preta"),
    ("Peixoto de Azevedo", "peixoto-de-azevedo"),
    ("Planalto da Serra", "planalto-da-serra"),
    ("Poconé", "pocone"),
    ("Pontal do Araguaia", "pontal-do-araguaia"),
    ("Ponte Branca", "ponte-branca"),
    ("Pontes e Lacerda", "pontes-e-lacerda"),
    ("Porto Alegre do Norte", "porto-alegre-do-norte"),
    ("Porto dos Gaúchos", "porto-dos-gauchos"),
    ("Porto Esperidião", "porto-esperidiao"),
    ("Porto Estrela", "porto-estrela"),
    ("Poxoréu", "poxoreu"),
    ("Primavera do Leste", "primavera-do-leste"),
    ("Querência", "querencia"),
    ("Reserva do Cabaçal", "reserva-do-cabacal"),
    ("Ribeirão Cascalheira", "ribeirao-cascalheira"),
    ("Ribeirãozinho", "ribeiraozinho"),
    ("Rio Branco", "rio-branco"),
    ("Rondolândia", "rondolandia"),
    ("Rondonópolis", "rondonopolis"),
    ("Rosário Oeste", "rosario-oeste"),
    ("Salto do Céu", "salto-do-ceu"),
    ("Santa Carmem", "santa-carmem"),
    ("Santa Cruz do Xingu", "santa-cruz-do-xingu"),
    ("Santa Rita do Trivelato", "santa-rita-do-trivelato"),
    ("Santa Terezinha", "santa-terezinha"),
    ("Santo Afonso", "santo-afonso"),
    ("Santo Antônio do Leste", "santo-antonio-do-leste"),
    ("Santo Antônio do Leverger", "santo-antonio-do-leverger"),
    ("São Félix do Araguaia", "sao-felix-do-araguaia"),
    ("São José do Povo", "sao-jose-do-povo"),
    ("São José do Rio Claro", "sao-jose-do-rio-claro"),
    ("São José do Xingu", "sao-jose-do-xingu"),
    ("São José dos Quatro Marcos", "sao-jose-dos-quatro-marcos"),
    ("São Pedro da Cipa", "sao-pedro-da-cipa"),
    ("Sapezal", "sapezal"),
    ("Serra Nova Dourada", "serra-nova-dourada"),
    ("Sinop", "sinop"),
    ("Sorriso", "sorriso"),
    ("Tabaporã", "tabapora"),
    ("Tangará da Serra", "tangara-da-serra"),
    ("Tapurah", "tapurah"),
    ("Terra Nova do Norte", "terra-nova-do-norte"),
    ("Tesouro", "tesouro"),
    ("Torixoréu", "torixoreu"),
    ("União do Sul", "uniao-do-sul"),
    ("Vale de São Domingos", "vale-de-sao-domingos"),
    ("Várzea Grande", "varzea-grande"),
    ("Vera", "vera"),
    ("Vila Bela da Santíssima Trindade", "vila-bela-da-santissima-trindade"),
    ("Vila Rica", "vila-rica"),];

/// Compiled-in municipality list, used when no data file is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinMunicipalitySource;

impl BuiltinMunicipalitySource {
    pub fn new() -> Self {
        Self
    }

    pub fn options() -> Vec<MunicipalityOption> {
        MATO_GROSSO
            .iter()
            .map(|(label, value)| MunicipalityOption::new(*label, *value))
            .collect()
    }
}

#[async_trait]
impl MunicipalitySourcePort for BuiltinMunicipalitySource {
    async fn load(&self) -> Result<Vec<MunicipalityOption>, MunicipalitySourceError> {
        Ok(Self::options())
    }
}
